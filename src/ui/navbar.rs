// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar overlaying the page.
//!
//! The bar shows the brand, one button per navigable section (highlighted
//! when the section is in view), and a language selector. Opening the
//! selector drops a row of the four supported languages below the bar.

use crate::domain::locale::Locale;
use crate::domain::section::Section;
use crate::i18n::Localizer;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography, with_alpha};
use crate::ui::layout::NAV_HEIGHT;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub localizer: &'a Localizer,
    /// Section currently highlighted as in view.
    pub active_section: Section,
    /// Whether the language dropdown is open.
    pub language_menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    NavClicked(Section),
    ToggleLanguageMenu,
    LanguageSelected(Locale),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    None,
    NavigateTo(Section),
    SelectLanguage(Locale),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, language_menu_open: &mut bool) -> Event {
    match message {
        Message::NavClicked(section) => {
            *language_menu_open = false;
            Event::NavigateTo(section)
        }
        Message::ToggleLanguageMenu => {
            *language_menu_open = !*language_menu_open;
            Event::None
        }
        Message::LanguageSelected(locale) => {
            *language_menu_open = false;
            Event::SelectLanguage(locale)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_bar(&ctx));
    if ctx.language_menu_open {
        content = content.push(build_language_menu(&ctx));
    }
    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new("AssistantDrive")
        .size(typography::LEAD)
        .color(palette::CYAN_400);

    let mut items = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for section in Section::NAV {
        let label = ctx.localizer.tr(section.label_key());
        let is_active = ctx.active_section == section;
        items = items.push(
            button(Text::new(label).size(typography::SMALL))
                .on_press(Message::NavClicked(section))
                .padding([spacing::XS, spacing::SM])
                .style(nav_item_style(is_active)),
        );
    }

    let language_label = format!("{} \u{25be}", ctx.localizer.locale().native_name());
    let language_button = button(Text::new(language_label).size(typography::SMALL))
        .on_press(Message::ToggleLanguageMenu)
        .padding([spacing::XS, spacing::SM])
        .style(nav_item_style(ctx.language_menu_open));

    let row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::with_width(Length::Fill))
        .push(items)
        .push(language_button);

    Container::new(row)
        .width(Length::Fill)
        .height(NAV_HEIGHT)
        .align_y(Vertical::Center)
        .style(bar_style)
        .into()
}

fn build_language_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for locale in Locale::ALL {
        let is_current = ctx.localizer.locale() == locale;
        row = row.push(
            button(Text::new(locale.native_name()).size(typography::SMALL))
                .on_press(Message::LanguageSelected(locale))
                .padding([spacing::XS, spacing::SM])
                .style(nav_item_style(is_current)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG])
        .style(bar_style)
        .into()
}

/// Style for the bar backdrop: translucent dark slate with a subtle bottom
/// border, matching the fixed header of the original page.
fn bar_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(with_alpha(palette::SLATE_900, opacity::BACKDROP).into()),
        border: Border {
            color: with_alpha(palette::BLUE_400, opacity::BORDER_SUBTLE),
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Style function for navigation items; the active one is tinted cyan.
fn nav_item_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let highlighted = active || matches!(status, button::Status::Hovered);
        button::Style {
            background: if active {
                Some(with_alpha(palette::CYAN_400, opacity::TINT_SOFT).into())
            } else if matches!(status, button::Status::Hovered) {
                Some(with_alpha(palette::CYAN_400, opacity::TINT_FAINT).into())
            } else {
                None
            },
            text_color: if highlighted {
                palette::CYAN_400
            } else {
                palette::GRAY_300
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(localizer: &Localizer, menu_open: bool) -> ViewContext<'_> {
        ViewContext {
            localizer,
            active_section: Section::Home,
            language_menu_open: menu_open,
        }
    }

    #[test]
    fn navbar_view_renders() {
        let localizer = Localizer::default();
        let _element = view(context(&localizer, false));
    }

    #[test]
    fn navbar_view_renders_with_language_menu_open() {
        let localizer = Localizer::default();
        let _element = view(context(&localizer, true));
    }

    #[test]
    fn toggle_opens_and_closes_the_language_menu() {
        let mut menu_open = false;
        let event = update(Message::ToggleLanguageMenu, &mut menu_open);
        assert!(menu_open);
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleLanguageMenu, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn nav_click_closes_the_menu_and_navigates() {
        let mut menu_open = true;
        let event = update(Message::NavClicked(Section::Demo), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::NavigateTo(Section::Demo));
    }

    #[test]
    fn language_selection_closes_the_menu_and_propagates() {
        let mut menu_open = true;
        let event = update(Message::LanguageSelected(Locale::Russian), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::SelectLanguage(Locale::Russian));
    }
}

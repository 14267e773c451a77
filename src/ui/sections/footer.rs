// SPDX-License-Identifier: MPL-2.0
//! Footer: brand blurb, quick links, support links, and the copyright line.
//!
//! The footer carries the `contact` anchor, so scrolling to the bottom of
//! the page highlights nothing in the navigation bar (contact has no nav
//! entry) while the tracker still lands on a real section.

use super::section_frame;
use crate::app::Message;
use crate::domain::section::Section;
use crate::i18n::Localizer;
use crate::ui::design_tokens::{palette, spacing, typography, with_alpha};
use crate::ui::layout::FOOTER_HEIGHT;
use iced::{
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

pub fn view(localizer: &Localizer) -> Element<'_, Message> {
    let brand_column = Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(2))
        .push(
            Text::new("AssistantDrive")
                .size(typography::LEAD)
                .color(palette::CYAN_400),
        )
        .push(
            Text::new(localizer.tr("footer.description"))
                .size(typography::SMALL)
                .color(palette::GRAY_400),
        );

    let mut quick_links = Column::new().spacing(spacing::XS).push(
        Text::new(localizer.tr("footer.quickLinks"))
            .size(typography::BODY)
            .color(palette::WHITE),
    );
    for section in Section::NAV {
        quick_links = quick_links.push(
            button(Text::new(localizer.tr(section.label_key())).size(typography::SMALL))
                .on_press(Message::GoToSection(section))
                .padding(0)
                .style(link_style),
        );
    }

    let support_keys = [
        "footer.helpCenter",
        "footer.privacyPolicy",
        "footer.termsOfService",
        "footer.faq",
    ];
    let mut support = Column::new().spacing(spacing::XS).push(
        Text::new(localizer.tr("footer.support"))
            .size(typography::BODY)
            .color(palette::WHITE),
    );
    for key in support_keys {
        support = support.push(
            Text::new(localizer.tr(key))
                .size(typography::SMALL)
                .color(palette::GRAY_400),
        );
    }

    let columns = Row::new()
        .spacing(spacing::XXL)
        .push(brand_column)
        .push(quick_links.width(Length::FillPortion(1)))
        .push(support.width(Length::FillPortion(1)));

    let divider = Container::new(Space::with_height(Length::Shrink))
        .width(Length::Fill)
        .height(1.0)
        .style(|_theme: &Theme| container::Style {
            background: Some(with_alpha(palette::GRAY_500, 0.4).into()),
            border: Border::default(),
            ..Default::default()
        });

    let copyright = format!(
        "\u{a9} 2024 AssistantDrive. {}",
        localizer.tr("footer.allRightsReserved")
    );
    let bottom_row = Row::new()
        .push(
            Text::new(copyright)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(Space::with_width(Length::Fill))
        .push(
            Text::new(localizer.tr("footer.poweredBy"))
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );

    let content = Column::new()
        .spacing(spacing::XL)
        .max_width(1080.0)
        .push(columns)
        .push(divider)
        .push(bottom_row);

    section_frame(FOOTER_HEIGHT, Some(palette::SLATE_950), content)
}

/// Style for borderless link-like buttons.
fn link_style(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => palette::CYAN_400,
            _ => palette::GRAY_400,
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_view_renders() {
        let localizer = Localizer::default();
        let _element = view(&localizer);
    }

    #[test]
    fn footer_is_the_contact_section() {
        // Keep the anchor assignment visible: the footer frame height must
        // match the contact bounds in the page geometry.
        use crate::application::port::layout::SectionLayout;
        let geometry = crate::ui::layout::PageGeometry::new();
        let contact = geometry.bounds(Section::Contact).expect("contact bounds");
        assert!((contact.height - FOOTER_HEIGHT).abs() < f32::EPSILON);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! One view per page section, in layout order.
//!
//! Every section renders inside a fixed-height frame so the page geometry in
//! [`crate::ui::layout`] stays truthful without measuring widgets. Views are
//! pure functions of the [`Localizer`](crate::i18n::Localizer); all copy goes
//! through dotted translation keys.

pub mod demo;
pub mod download;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod privacy;

use crate::app::Message;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography, with_alpha};
use iced::{
    alignment::Horizontal,
    widget::{button, container, Column, Container, Text},
    Border, Color, Element, Length, Theme,
};

/// Wraps a section's content in its fixed-height frame.
fn section_frame<'a>(
    height: f32,
    background: Option<Color>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(height)
        .align_x(Horizontal::Center)
        .padding([spacing::XXL, spacing::LG])
        .style(move |_theme: &Theme| container::Style {
            background: background.map(Into::into),
            ..Default::default()
        })
        .into()
}

/// Centered heading block: accent title over a muted subtitle.
fn section_heading<'a>(title: String, subtitle: String) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new(title)
                .size(typography::H2)
                .color(palette::BLUE_400),
        )
        .push(
            Text::new(subtitle)
                .size(typography::LEAD)
                .color(palette::GRAY_300),
        )
}

/// Style for content cards: raised slate surface with a subtle blue border.
fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(palette::SLATE_800.into()),
        border: Border {
            color: with_alpha(palette::BLUE_400, opacity::BORDER_SUBTLE),
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// A titled card with a short description, used by the feature and privacy
/// grids.
fn card<'a>(title: String, description: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::H3).color(palette::WHITE))
        .push(
            Text::new(description)
                .size(typography::BODY)
                .color(palette::GRAY_300),
        );
    Container::new(content)
        .width(340.0)
        .padding(spacing::LG)
        .style(card_style)
        .into()
}

/// Style function for filled call-to-action buttons.
fn cta_style(fill: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Color {
                    r: (fill.r * 1.15).min(1.0),
                    g: (fill.g * 1.15).min(1.0),
                    b: (fill.b * 1.15).min(1.0),
                    a: fill.a,
                }
            }
            _ => fill,
        };
        button::Style {
            background: Some(background.into()),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// A filled call-to-action button.
fn cta_button<'a>(label: String, fill: Color, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::MD, spacing::XL])
        .style(cta_style(fill))
        .into()
}

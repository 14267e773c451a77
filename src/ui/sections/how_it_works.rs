// SPDX-License-Identifier: MPL-2.0
//! "How it works" section: three numbered steps.

use super::{section_frame, section_heading};
use crate::app::Message;
use crate::i18n::Localizer;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::layout::HOW_IT_WORKS_HEIGHT;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Column, Container, Row, Text},
    Border, Element, Theme,
};

/// Catalog key stems of the three steps, in order.
const STEPS: [&str; 3] = ["mount", "drive", "alerts"];

pub fn view(localizer: &Localizer) -> Element<'_, Message> {
    let heading = section_heading(
        localizer.tr("howItWorks.title"),
        localizer.tr("howItWorks.subtitle"),
    );

    let mut steps = Row::new().spacing(spacing::XL);
    for (index, stem) in STEPS.iter().enumerate() {
        steps = steps.push(step(
            index + 1,
            localizer.tr(&format!("steps.{stem}.title")),
            localizer.tr(&format!("steps.{stem}.description")),
        ));
    }

    let content = Column::new()
        .spacing(spacing::XXL)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(steps);

    section_frame(HOW_IT_WORKS_HEIGHT, Some(palette::SLATE_950), content)
}

fn step<'a>(number: usize, title: String, description: String) -> Element<'a, Message> {
    let badge = Container::new(
        Text::new(number.to_string())
            .size(typography::LEAD)
            .color(palette::SLATE_950),
    )
    .width(44.0)
    .height(44.0)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(badge_style);

    Column::new()
        .spacing(spacing::MD)
        .width(320.0)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(Text::new(title).size(typography::H3).color(palette::WHITE))
        .push(
            Text::new(description)
                .size(typography::BODY)
                .color(palette::GRAY_300)
                .align_x(Horizontal::Center),
        )
        .into()
}

/// Circular cyan badge holding the step number.
fn badge_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(palette::CYAN_400.into()),
        border: Border {
            radius: 22.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

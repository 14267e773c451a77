// SPDX-License-Identifier: MPL-2.0
//! Feature grid: five capability cards under the section heading.

use super::{card, section_frame, section_heading};
use crate::app::Message;
use crate::i18n::Localizer;
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::layout::FEATURES_HEIGHT;
use iced::{
    alignment::Horizontal,
    widget::{Column, Row},
    Element,
};

/// Catalog key stems of the five feature cards, in display order.
const FEATURES: [&str; 5] = [
    "laneDetection",
    "trafficAlerts",
    "voiceGuidance",
    "lowLatency",
    "privacy",
];

pub fn view(localizer: &Localizer) -> Element<'_, Message> {
    let heading = section_heading(
        localizer.tr("features.title"),
        localizer.tr("features.subtitle"),
    );

    let feature_card = |stem: &str| {
        card(
            localizer.tr(&format!("features.{stem}.title")),
            localizer.tr(&format!("features.{stem}.description")),
        )
    };

    let top_row = Row::new()
        .spacing(spacing::LG)
        .push(feature_card(FEATURES[0]))
        .push(feature_card(FEATURES[1]))
        .push(feature_card(FEATURES[2]));
    let bottom_row = Row::new()
        .spacing(spacing::LG)
        .push(feature_card(FEATURES[3]))
        .push(feature_card(FEATURES[4]));

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(top_row)
        .push(bottom_row);

    section_frame(FEATURES_HEIGHT, Some(palette::SLATE_900), content)
}

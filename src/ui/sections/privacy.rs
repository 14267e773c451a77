// SPDX-License-Identifier: MPL-2.0
//! Privacy and reliability section: three assurance cards.
//!
//! This block has no anchor of its own - it sits between the demo and
//! download sections, outside the tracked ranges.

use super::{card, section_frame, section_heading};
use crate::app::Message;
use crate::i18n::Localizer;
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::layout::PRIVACY_HEIGHT;
use iced::{
    alignment::Horizontal,
    widget::{Column, Row},
    Element,
};

/// Catalog key stems of the three assurance cards, in display order.
const ASSURANCES: [&str; 3] = ["encryption", "noSharing", "consent"];

pub fn view(localizer: &Localizer) -> Element<'_, Message> {
    let heading = section_heading(
        localizer.tr("privacy.title"),
        localizer.tr("privacy.subtitle"),
    );

    let mut cards = Row::new().spacing(spacing::LG);
    for stem in ASSURANCES {
        cards = cards.push(card(
            localizer.tr(&format!("privacy.{stem}.title")),
            localizer.tr(&format!("privacy.{stem}.description")),
        ));
    }

    let content = Column::new()
        .spacing(spacing::XXL)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(cards);

    section_frame(PRIVACY_HEIGHT, Some(palette::SLATE_950), content)
}

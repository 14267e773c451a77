// SPDX-License-Identifier: MPL-2.0
//! Hero section: headline, pitch, and the two store call-to-actions.

use super::{cta_button, section_frame};
use crate::app::Message;
use crate::domain::section::Section;
use crate::i18n::Localizer;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::layout::{HERO_HEIGHT, NAV_HEIGHT};
use iced::{
    alignment::Horizontal,
    widget::{Column, Row, Space, Text},
    Element,
};

pub fn view(localizer: &Localizer) -> Element<'_, Message> {
    let headline = Column::new()
        .align_x(Horizontal::Center)
        .push(
            Text::new(localizer.tr("hero.title1"))
                .size(typography::HERO)
                .color(palette::WHITE),
        )
        .push(
            Text::new(localizer.tr("hero.title2"))
                .size(typography::HERO)
                .color(palette::CYAN_400),
        )
        .push(
            Text::new(localizer.tr("hero.title3"))
                .size(typography::HERO)
                .color(palette::WHITE),
        );

    let pitch = Text::new(localizer.tr("hero.description"))
        .size(typography::LEAD)
        .color(palette::GRAY_300)
        .width(640.0)
        .align_x(Horizontal::Center);

    let store_buttons = Row::new()
        .spacing(spacing::MD)
        .push(cta_button(
            localizer.tr("hero.downloadIOS"),
            palette::BLUE_600,
            Message::GoToSection(Section::Download),
        ))
        .push(cta_button(
            localizer.tr("hero.downloadAndroid"),
            palette::EMERALD_500,
            Message::GoToSection(Section::Download),
        ));

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        // Clear the fixed navbar overlaying the top of the page.
        .push(Space::with_height(NAV_HEIGHT))
        .push(headline)
        .push(pitch)
        .push(store_buttons);

    section_frame(HERO_HEIGHT, Some(palette::SLATE_950), content)
}

// SPDX-License-Identifier: MPL-2.0
//! Demo section: video placeholder and the voice-alert playback panel.

use super::{card_style, cta_button, section_frame, section_heading};
use crate::app::Message;
use crate::i18n::Localizer;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::layout::DEMO_HEIGHT;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Element,
};

pub fn view(localizer: &Localizer) -> Element<'_, Message> {
    let heading = section_heading(localizer.tr("demo.title"), localizer.tr("demo.subtitle"));

    let panels = Row::new()
        .spacing(spacing::XL)
        .push(video_panel(localizer))
        .push(voice_panel(localizer));

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(panels);

    section_frame(DEMO_HEIGHT, Some(palette::SLATE_900), content)
}

fn video_panel(localizer: &Localizer) -> Element<'_, Message> {
    let placeholder = Container::new(
        Text::new(localizer.tr("demo.videoPlaceholder"))
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(620.0)
    .height(340.0)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(card_style);

    Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(localizer.tr("demo.videoTitle"))
                .size(typography::H3)
                .color(palette::CYAN_400),
        )
        .push(placeholder)
        .into()
}

fn voice_panel(localizer: &Localizer) -> Element<'_, Message> {
    let alert_quote = format!("\u{201c}{}\u{201d}", localizer.tr("demo.voiceAlert"));
    let translation = format!("({})", localizer.tr("demo.translation"));

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(cta_button(
                localizer.tr("demo.playButton"),
                palette::BLUE_600,
                Message::PlayVoiceDemo,
            ))
            .push(
                Text::new(alert_quote)
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .push(
                Text::new(translation)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            ),
    )
    .width(340.0)
    .padding(spacing::XL)
    .style(card_style);

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new(localizer.tr("demo.voiceTitle"))
                .size(typography::H3)
                .color(palette::CYAN_400),
        )
        .push(panel)
        .into()
}

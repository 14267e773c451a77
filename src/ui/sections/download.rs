// SPDX-License-Identifier: MPL-2.0
//! Download call-to-action: store badges and the QR placeholder.

use super::{card_style, section_frame, section_heading};
use crate::app::Message;
use crate::i18n::Localizer;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::layout::DOWNLOAD_HEIGHT;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Column, Container, Row, Text},
    Border, Color, Element, Theme,
};

pub fn view(localizer: &Localizer) -> Element<'_, Message> {
    let heading = section_heading(
        localizer.tr("download.title"),
        localizer.tr("download.subtitle"),
    );

    let badges = Row::new()
        .spacing(spacing::LG)
        .push(store_badge(
            localizer.tr("download.downloadOn"),
            localizer.tr("download.appStore"),
            palette::BLUE_600,
        ))
        .push(store_badge(
            localizer.tr("download.getItOn"),
            localizer.tr("download.googlePlay"),
            palette::EMERALD_500,
        ));

    let qr = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Container::new(
                Text::new("QR")
                    .size(typography::H2)
                    .color(palette::GRAY_500),
            )
            .width(150.0)
            .height(150.0)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(card_style),
        )
        .push(
            Text::new(localizer.tr("download.scanToDownload"))
                .size(typography::SMALL)
                .color(palette::GRAY_400),
        );

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(badges)
        .push(qr);

    section_frame(DOWNLOAD_HEIGHT, Some(palette::SLATE_900), content)
}

/// Two-line store badge, e.g. "Download on the / App Store".
fn store_badge<'a>(lead_in: String, store: String, fill: Color) -> Element<'a, Message> {
    let label = Column::new()
        .push(
            Text::new(lead_in)
                .size(typography::CAPTION)
                .color(palette::GRAY_300),
        )
        .push(Text::new(store).size(typography::LEAD).color(palette::WHITE));

    Container::new(label)
        .padding([spacing::MD, spacing::XL])
        .style(move |_theme: &Theme| container::Style {
            background: Some(fill.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Experience timeline.

use super::{faded, frame, heading, revealed, Message, SectionId, ViewContext};
use crate::content::{Experience, Portfolio};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, container::CardLook};
use iced::widget::{text, Column, Container, Row};
use iced::{Element, Length};

pub fn items(portfolio: &Portfolio) -> usize {
    1 + portfolio.experiences.len()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let timeline = ctx
        .portfolio
        .experiences
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::LG), |column, (i, experience)| {
            column.push(entry(ctx, i, experience))
        });

    let body = Column::new()
        .spacing(spacing::XL)
        .push(heading(
            ctx,
            SectionId::Experience,
            "section-experience-sub",
            "section-experience-title",
        ))
        .push(timeline);

    frame(SectionId::Experience, body)
}

fn entry<'a>(ctx: &ViewContext<'a>, index: usize, experience: &'a Experience) -> Element<'a, Message> {
    let visual = ctx.reveal(SectionId::Experience, 1 + index);

    let marker = Container::new(
        text(experience.company_name.chars().next().unwrap_or('?').to_string())
            .size(typography::TITLE_SM),
    )
    .center(Length::Fixed(sizing::AVATAR))
    .style(styles::container::pill(faded(ctx.colors.brand_muted, visual.opacity)));

    let points = experience
        .points
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, point| {
            column.push(
                text(format!("• {point}"))
                    .size(typography::BODY)
                    .color(faded(ctx.colors.text_secondary, visual.opacity)),
            )
        });

    let details = Column::new()
        .spacing(spacing::XS)
        .push(text(experience.title.clone()).size(typography::TITLE_MD))
        .push(
            text(format!("{} · {}", experience.company_name, experience.date))
                .size(typography::CAPTION)
                .color(faded(ctx.colors.text_secondary, visual.opacity)),
        )
        .push(points);

    let card = Container::new(details)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card(
            ctx.colors,
            CardLook {
                opacity: visual.opacity,
                ..CardLook::RESTING
            },
        ));

    revealed(Row::new().spacing(spacing::LG).push(marker).push(card), visual)
}

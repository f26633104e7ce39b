// SPDX-License-Identifier: MPL-2.0
//! Introduction and service cards.

use super::{faded, frame, heading, revealed, Message, SectionId, ViewContext};
use crate::content::{Portfolio, Service};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::motion::CardKey;
use crate::ui::styles::{self, container::CardLook};
use iced::alignment::Horizontal;
use iced::widget::{mouse_area, text, Column, Container, Row};
use iced::{Element, Length, Padding};

/// Heading, intro, then one item per service.
pub fn items(portfolio: &Portfolio) -> usize {
    2 + portfolio.services.len()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let intro_visual = ctx.reveal(SectionId::About, 1);
    let intro = text(ctx.portfolio.profile.intro.clone())
        .size(typography::BODY)
        .color(faded(ctx.colors.text_secondary, intro_visual.opacity));

    let cards = ctx
        .portfolio
        .services
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |row, (i, service)| {
            row.push(service_card(ctx, i, service))
        })
        .wrap();

    let body = Column::new()
        .spacing(spacing::XL)
        .push(heading(ctx, SectionId::About, "section-about-sub", "section-about-title"))
        .push(revealed(intro, intro_visual))
        .push(cards);

    frame(SectionId::About, body)
}

fn service_card<'a>(ctx: &ViewContext<'a>, index: usize, service: &'a Service) -> Element<'a, Message> {
    let key = CardKey::Service(index);
    let reveal = ctx.reveal(SectionId::About, 2 + index);
    let hover = ctx.hover.visual(key, ctx.now);

    let initial = service.title.chars().next().unwrap_or('?').to_string();
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(text(initial).size(typography::TITLE_LG).color(ctx.colors.brand))
        .push(
            text(service.title.clone()).size(typography::TITLE_SM),
        );

    let card = Container::new(content)
        .width(Length::Fixed(sizing::SERVICE_CARD_WIDTH))
        .padding([spacing::XL, spacing::LG])
        .style(styles::container::card(
            ctx.colors,
            CardLook {
                glow: hover.glow,
                highlight: hover.glow,
                opacity: reveal.opacity,
            },
        ));

    let lifted = Container::new(card).padding(Padding {
        top: (reveal.offset + 10.0 - hover.lift).max(0.0),
        bottom: hover.lift,
        ..Padding::ZERO
    });

    mouse_area(lifted)
        .on_enter(Message::Hover(key, true))
        .on_exit(Message::Hover(key, false))
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Skill categories and technology badges.

use super::{faded, frame, heading, revealed, Message, SectionId, ViewContext};
use crate::content::{Portfolio, SkillCategory};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, container::CardLook};
use iced::widget::{text, Column, Container, Row};
use iced::{Element, Length};

pub fn items(portfolio: &Portfolio) -> usize {
    2 + portfolio.skill_categories.len()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let categories = ctx
        .portfolio
        .skill_categories
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |row, (i, category)| {
            row.push(category_card(ctx, i, category))
        });

    let badges_visual = ctx.reveal(
        SectionId::Skills,
        1 + ctx.portfolio.skill_categories.len(),
    );
    let badges = ctx
        .portfolio
        .technologies
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, technology| {
            row.push(
                Container::new(
                    text(technology.name.clone())
                        .size(typography::CAPTION)
                        .color(faded(ctx.colors.text_primary, badges_visual.opacity)),
                )
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::pill(faded(
                    ctx.colors.surface_card,
                    badges_visual.opacity,
                ))),
            )
        })
        .wrap();

    let body = Column::new()
        .spacing(spacing::XL)
        .push(heading(ctx, SectionId::Skills, "section-skills-sub", "section-skills-title"))
        .push(categories.wrap())
        .push(revealed(badges, badges_visual));

    frame(SectionId::Skills, body)
}

fn category_card<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    category: &'a SkillCategory,
) -> Element<'a, Message> {
    let visual = ctx.reveal(SectionId::Skills, 1 + index);

    let skills = category
        .skills
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, skill| {
            column.push(
                text(skill.clone())
                    .size(typography::BODY)
                    .color(faded(ctx.colors.text_secondary, visual.opacity)),
            )
        });

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(text(category.title.clone()).size(typography::TITLE_SM))
            .push(skills),
    )
    .width(Length::Fixed(sizing::SKILL_CARD_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::card(
        ctx.colors,
        CardLook {
            opacity: visual.opacity,
            ..CardLook::RESTING
        },
    ));

    revealed(card, visual)
}

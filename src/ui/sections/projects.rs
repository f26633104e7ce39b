// SPDX-License-Identifier: MPL-2.0
//! Project cards with hover lift.

use super::{faded, frame, heading, Message, SectionId, ViewContext};
use crate::content::{Portfolio, Project, Tag};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::motion::CardKey;
use crate::ui::styles::{self, container::CardLook};
use crate::ui::theming::ColorScheme;
use iced::widget::{mouse_area, text, Column, Container, Row};
use iced::{Color, Element, Length, Padding};

pub fn items(portfolio: &Portfolio) -> usize {
    1 + portfolio.projects.len()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = ctx
        .portfolio
        .projects
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |row, (i, project)| {
            row.push(project_card(ctx, i, project))
        })
        .wrap();

    let body = Column::new()
        .spacing(spacing::XL)
        .push(heading(
            ctx,
            SectionId::Projects,
            "section-projects-sub",
            "section-projects-title",
        ))
        .push(cards);

    frame(SectionId::Projects, body)
}

/// Color of a tag gradient name such as `blue-text-gradient`.
#[must_use]
pub fn tag_color(tag: &Tag, colors: &ColorScheme) -> Color {
    match tag.color.split('-').next().unwrap_or_default() {
        "blue" => Color::from_rgb(0.184, 0.8, 0.933),
        "green" => Color::from_rgb(0.071, 0.918, 0.576),
        "pink" => Color::from_rgb(0.925, 0.282, 0.6),
        "orange" => Color::from_rgb(0.976, 0.573, 0.09),
        "violet" | "purple" => palette::BRAND_300,
        _ => colors.text_secondary,
    }
}

fn project_card<'a>(ctx: &ViewContext<'a>, index: usize, project: &'a Project) -> Element<'a, Message> {
    let key = CardKey::Project(index);
    let reveal = ctx.reveal(SectionId::Projects, 1 + index);
    let hover = ctx.hover.visual(key, ctx.now);

    let tags = project
        .tags
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, tag| {
            row.push(
                text(format!("#{}", tag.name))
                    .size(typography::CAPTION)
                    .color(faded(tag_color(tag, &ctx.colors), reveal.opacity)),
            )
        })
        .wrap();

    let mut links = Row::new().spacing(spacing::MD);
    if !project.source_code_link.is_empty() {
        links = links.push(
            text(format!(
                "{}: {}",
                ctx.i18n.tr("section-projects-source"),
                project.source_code_link
            ))
            .size(typography::CAPTION)
            .color(faded(ctx.colors.brand, reveal.opacity)),
        );
    }
    if !project.live_demo_link.is_empty() {
        links = links.push(
            text(format!(
                "{}: {}",
                ctx.i18n.tr("section-projects-demo"),
                project.live_demo_link
            ))
            .size(typography::CAPTION)
            .color(faded(ctx.colors.brand, reveal.opacity)),
        );
    }

    let content = Column::new()
        .spacing(spacing::SM)
        .push(text(project.name.clone()).size(typography::TITLE_MD))
        .push(
            text(project.description.clone())
                .size(typography::BODY)
                .color(faded(ctx.colors.text_secondary, reveal.opacity)),
        )
        .push(tags)
        .push(links.wrap());

    let card = Container::new(content)
        .width(Length::Fixed(sizing::PROJECT_CARD_WIDTH))
        .padding(spacing::LG)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_gradients_map_to_colors() {
        let colors = ColorScheme::dark();
        let tag = |color: &str| Tag {
            name: "x".into(),
            color: color.into(),
        };
        assert_ne!(tag_color(&tag("blue-text-gradient"), &colors), colors.text_secondary);
        assert_ne!(
            tag_color(&tag("green-text-gradient"), &colors),
            tag_color(&tag("pink-text-gradient"), &colors)
        );
        assert_eq!(tag_color(&tag(""), &colors), colors.text_secondary);
    }
}

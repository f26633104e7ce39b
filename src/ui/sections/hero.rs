// SPDX-License-Identifier: MPL-2.0
//! Landing section: greeting, headline and call to action.

use super::{faded, frame, revealed, Message, SectionId, ViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Row};
use iced::{Element, Font};

/// Number of staggered items, for the reveal tracker.
pub const ITEMS: usize = 3;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile = &ctx.portfolio.profile;
    let first_name = profile
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    let greeting = ctx.reveal(SectionId::Hero, 0);
    let title = Row::new()
        .spacing(spacing::SM)
        .push(
            text(ctx.i18n.tr("hero-greeting"))
                .size(typography::HERO)
                .color(faded(ctx.colors.text_primary, greeting.opacity)),
        )
        .push(
            text(first_name)
                .size(typography::HERO)
                .color(faded(ctx.colors.brand, greeting.opacity))
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        );

    let subtitle = ctx.reveal(SectionId::Hero, 1);
    let headline = Column::new()
        .spacing(spacing::SM)
        .push(
            text(profile.headline.clone())
                .size(typography::TITLE_MD)
                .color(faded(ctx.colors.text_primary, subtitle.opacity)),
        )
        .push(
            text(profile.intro.clone())
                .size(typography::BODY)
                .color(faded(ctx.colors.text_secondary, subtitle.opacity)),
        );

    let actions = ctx.reveal(SectionId::Hero, 2);
    let cta = Row::new().spacing(spacing::MD).push(
        button(text(ctx.i18n.tr("hero-cta-contact")))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::primary(ctx.colors))
            .on_press(Message::Navigate(SectionId::Contact)),
    );

    let body = Column::new()
        .spacing(spacing::XL)
        .padding([spacing::XXL, 0.0])
        .push(revealed(title, greeting))
        .push(revealed(headline, subtitle))
        .push(revealed(cta, actions));

    frame(SectionId::Hero, body)
}

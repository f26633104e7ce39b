// SPDX-License-Identifier: MPL-2.0
//! Testimonials section: the carousel cards and their controls.

use super::{indicator, CardVisual, Message, State};
use crate::content::Testimonial;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::{faded, frame, heading, revealed, SectionId, ViewContext};
use crate::ui::styles::{self, container::CardLook};
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space};
use iced::{Element, Length, Padding};

/// Heading, cards, controls.
pub const ITEMS: usize = 3;

pub fn view<'a>(ctx: &ViewContext<'a>, state: &State) -> Element<'a, Message> {
    let testimonials = &ctx.portfolio.testimonials;

    let cards_visual = ctx.reveal(SectionId::Testimonials, 1);
    let controls_visual = ctx.reveal(SectionId::Testimonials, 2);

    let cards: Element<'a, Message> = match state.active_index() {
        Some(active) => {
            let row = visible_indices(active, testimonials.len())
                .into_iter()
                .fold(
                    Row::new().spacing(spacing::LG).align_y(Vertical::Center),
                    |row, index| {
                        let visual = state.animator().visual(index, ctx.now);
                        row.push(card(
                            ctx,
                            &testimonials[index],
                            visual,
                            index == active,
                            cards_visual.opacity,
                        ))
                    },
                );
            mouse_area(Container::new(row).center_x(Length::Fill))
                .on_move(Message::PointerMoved)
                .on_press(Message::PointerPressed)
                .on_release(Message::PointerReleased)
                .on_exit(Message::PointerLeft)
                .into()
        }
        None => text(ctx.i18n.tr("carousel-empty"))
            .size(typography::BODY)
            .color(ctx.colors.text_secondary)
            .into(),
    };

    let body = Column::new()
        .spacing(spacing::XL)
        .push(heading(
            ctx,
            SectionId::Testimonials,
            "section-testimonials-sub",
            "section-testimonials-title",
        ))
        .push(revealed(cards, cards_visual))
        .push(revealed(controls(ctx, state), controls_visual));

    frame(SectionId::Testimonials, body)
}

/// Indices drawn around `active`: its neighbors when there are enough cards.
fn visible_indices(active: usize, count: usize) -> Vec<usize> {
    match count {
        0 => Vec::new(),
        1 | 2 => (0..count).collect(),
        _ => vec![(active + count - 1) % count, active, (active + 1) % count],
    }
}

fn card<'a>(
    ctx: &ViewContext<'a>,
    testimonial: &'a Testimonial,
    visual: CardVisual,
    is_active: bool,
    reveal_opacity: f32,
) -> Element<'a, Message> {
    let opacity = visual.opacity * reveal_opacity;
    let base_width = if is_active {
        sizing::TESTIMONIAL_CARD_WIDTH
    } else {
        sizing::TESTIMONIAL_SIDE_WIDTH
    };

    let avatar = Container::new(
        text(testimonial.initial().to_string())
            .size(typography::TITLE_SM)
            .color(faded(ctx.colors.text_primary, opacity)),
    )
    .center(Length::Fixed(sizing::AVATAR))
    .style(styles::container::pill(faded(ctx.colors.brand, opacity)));

    let role = ctx.i18n.tr_with_args(
        "carousel-role",
        &[
            ("designation", testimonial.designation.as_str()),
            ("company", testimonial.company.as_str()),
        ],
    );

    let author = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(testimonial.name.clone())
                .size(typography::BODY)
                .color(faded(ctx.colors.text_primary, opacity)),
        )
        .push(
            text(role)
                .size(typography::CAPTION)
                .color(faded(ctx.colors.text_secondary, opacity)),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .push(
            text("\u{201c}")
                .size(typography::TITLE_LG)
                .color(faded(ctx.colors.brand, opacity)),
        )
        .push(
            text(testimonial.quote.clone())
                .size(if is_active {
                    typography::BODY
                } else {
                    typography::CAPTION
                })
                .color(faded(ctx.colors.text_primary, opacity)),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(avatar)
                .push(author),
        );

    let surface = Container::new(content)
        .width(Length::Fixed(base_width * visual.scale))
        .padding(spacing::LG * visual.scale)
        .style(styles::container::card(
            ctx.colors,
            CardLook {
                glow: visual.shadow,
                highlight: visual.highlight,
                opacity,
            },
        ));

    // Entering cards slide in from `offset_x` towards their slot.
    Container::new(surface)
        .padding(Padding {
            left: visual.offset_x.max(0.0),
            right: (-visual.offset_x).max(0.0),
            ..Padding::ZERO
        })
        .into()
}

fn controls<'a>(ctx: &ViewContext<'a>, state: &State) -> Element<'a, Message> {
    let colors: ColorScheme = ctx.colors;
    let count = state.count();
    let progress = indicator::progress(state.active_index(), count);

    let markers = progress
        .markers
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, &active)| {
            row.push(
                button(
                    Space::new()
                        .width(Length::Fixed(sizing::MARKER))
                        .height(Length::Fixed(sizing::MARKER)),
                )
                .padding(0)
                .style(styles::button::marker(colors, active))
                .on_press(Message::Jump(index)),
            )
        });

    let fill = Container::new(
        Space::new()
            .width(Length::Fixed(sizing::LOADER_BAR_WIDTH * progress.fill))
            .height(Length::Fixed(sizing::PROGRESS_TRACK)),
    )
    .style(styles::container::pill(colors.brand));

    let track = Container::new(fill)
        .width(Length::Fixed(sizing::LOADER_BAR_WIDTH))
        .height(Length::Fixed(sizing::PROGRESS_TRACK))
        .style(styles::container::pill(colors.brand_muted));

    let label = indicator::label(state.active_index(), count).map(|(current, total)| {
        text(ctx.i18n.tr_with_args(
            "carousel-progress",
            &[
                ("current", current.to_string().as_str()),
                ("total", total.to_string().as_str()),
            ],
        ))
        .size(typography::CAPTION)
        .color(colors.text_secondary)
    });

    let arrow = |key: &str, message: Message| {
        let pressable = (count > 0).then_some(message);
        button(text(ctx.i18n.tr(key)).size(typography::CAPTION))
            .padding([spacing::XS, spacing::MD])
            .height(Length::Fixed(sizing::CAROUSEL_BUTTON))
            .style(styles::button::outline(colors))
            .on_press_maybe(pressable)
    };

    let mut indicator = Column::new()
        .spacing(spacing::SM)
        .align_x(iced::alignment::Horizontal::Center)
        .push(markers)
        .push(track);
    if let Some(label) = label {
        indicator = indicator.push(label);
    }

    Container::new(
        Row::new()
            .spacing(spacing::XL)
            .align_y(Vertical::Center)
            .push(arrow("carousel-previous", Message::Previous))
            .push(indicator)
            .push(arrow("carousel-next", Message::Next)),
    )
    .center_x(Length::Fill)
    .into()
}

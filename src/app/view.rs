// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::update::PAGE_SCROLLABLE_ID;
use super::{Message, Screen};
use crate::content::Portfolio;
use crate::i18n::I18n;
use crate::ui::carousel;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::loader;
use crate::ui::motion::{HoverAnimator, Motion, RevealTracker};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::sections::{
    about, contact, experience, hero, projects, skills, SectionId,
    ViewContext as SectionViewContext,
};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Column, Container, Id, Row, Scrollable, Space, Stack},
    Background, Border, Element, Length, Theme,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub colors: ColorScheme,
    pub is_dark: bool,
    pub motion: &'a Motion,
    pub portfolio: &'a Portfolio,
    pub loader: &'a loader::State,
    pub navbar: navbar::State,
    pub reveals: &'a RevealTracker<SectionId>,
    pub hover: &'a HoverAnimator,
    pub carousel: &'a carousel::State,
    pub contact: &'a contact::State,
    pub notice: Option<&'a str>,
    pub now: Instant,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;
    match ctx.screen {
        Screen::Loading => loader::view(
            ctx.loader,
            &ctx.portfolio.profile,
            ctx.i18n,
            colors,
            ctx.now,
        ),
        Screen::Portfolio => view_portfolio(ctx, colors),
    }
}

fn view_portfolio(ctx: ViewContext<'_>, colors: ColorScheme) -> Element<'_, Message> {
    let page = view_page(&ctx, colors);

    let mut overlay = Column::new().width(Length::Fill).push(
        navbar::view(NavbarViewContext {
            i18n: ctx.i18n,
            colors,
            owner: ctx.portfolio.profile.name.as_str(),
            is_dark: ctx.is_dark,
            state: ctx.navbar,
        })
        .map(Message::Navbar),
    );
    if let Some(key) = ctx.notice {
        overlay = overlay.push(view_notice(ctx.i18n, key, colors));
    }

    Container::new(Stack::new().push(page).push(overlay))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(colors))
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>, colors: ColorScheme) -> Element<'a, Message> {
    let section_ctx = SectionViewContext {
        i18n: ctx.i18n,
        portfolio: ctx.portfolio,
        colors,
        reveals: ctx.reveals,
        hover: ctx.hover,
        motion: ctx.motion,
        now: ctx.now,
    };

    let sections = Column::new()
        .width(Length::Fill)
        .push(hero::view(&section_ctx).map(Message::Section))
        .push(about::view(&section_ctx).map(Message::Section))
        .push(experience::view(&section_ctx).map(Message::Section))
        .push(projects::view(&section_ctx).map(Message::Section))
        .push(skills::view(&section_ctx).map(Message::Section))
        .push(carousel::view(&section_ctx, ctx.carousel).map(Message::Carousel))
        .push(contact::view(&section_ctx, ctx.contact).map(Message::Section));

    Scrollable::new(sections)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::Scrolled)
        .into()
}

fn view_notice<'a>(i18n: &I18n, key: &str, colors: ColorScheme) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            text(i18n.tr(key))
                .size(typography::CAPTION)
                .color(colors.text_primary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("notice-dismiss")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::outline(colors))
                .on_press(Message::DismissNotice),
        );

    Container::new(
        Container::new(row)
            .padding([spacing::SM, spacing::MD])
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(colors.surface_card)),
                border: Border {
                    color: colors.error,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                ..Default::default()
            }),
    )
    .center_x(Length::Fill)
    .padding([0.0, spacing::XXL])
    .into()
}

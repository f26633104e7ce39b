// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! The navbar shows the owner's name as a logo, one link per section and a
//! theme toggle. It tracks which section sits under the reading line
//! (scroll-spy) and switches to an opaque look once the page has scrolled.
//! On narrow windows the links collapse into a menu.

use crate::config::NAVBAR_SCROLLED_OFFSET;
use crate::i18n::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::sections::{PageLayout, SectionId};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, responsive, text, Column, Container, Row, Space},
    Background, Border, Element, Length, Size, Theme,
};

/// Width under which links collapse into the menu.
const COMPACT_WIDTH: f32 = 900.0;

/// Navbar state owned by the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    pub menu_open: bool,
    pub scrolled: bool,
    pub active: Option<SectionId>,
}

impl State {
    /// Updates the scrolled look and the highlighted link from a page offset.
    ///
    /// The hero has no link, so scrolling back to it clears the highlight.
    pub fn on_scroll(&mut self, offset_y: f32, layout: &PageLayout) {
        self.scrolled = offset_y > NAVBAR_SCROLLED_OFFSET;
        let active = layout
            .section_at(offset_y)
            .filter(|section| section.nav_key().is_some());
        if active != self.active {
            tracing::debug!(?active, "active section changed");
            self.active = active;
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub owner: &'a str,
    /// Whether the page is currently drawn dark.
    pub is_dark: bool,
    pub state: State,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    LinkPressed(SectionId),
    LogoPressed,
    ToggleMenu,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ScrollTo(SectionId),
    ScrollToTop,
    ThemeToggled,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::LinkPressed(section) => {
            state.menu_open = false;
            state.active = section.nav_key().map(|_| section);
            Event::ScrollTo(section)
        }
        Message::LogoPressed => {
            state.menu_open = false;
            state.active = None;
            Event::ScrollToTop
        }
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::ToggleTheme => Event::ThemeToggled,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let scrolled = ctx.state.scrolled;
    let bar = responsive(move |size: Size| view_inner(&ctx, size));

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Shrink)
        .style(styles::container::navbar(colors, scrolled))
        .into()
}

fn view_inner<'a>(ctx: &ViewContext<'a>, size: Size) -> Element<'a, Message> {
    let compact = size.width < COMPACT_WIDTH;

    let logo = button(
        text(ctx.owner.to_string())
            .size(typography::TITLE_SM)
            .color(ctx.colors.text_primary),
    )
    .padding(0)
    .style(styles::button::nav_link(ctx.colors, true))
    .on_press(Message::LogoPressed);

    let mut top_bar = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::XXL])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(logo)
        .push(Space::new().width(Length::Fill));

    if !compact {
        top_bar = links(ctx)
            .into_iter()
            .fold(top_bar, |row, link| row.push(link));
    }

    top_bar = top_bar.push(theme_toggle(ctx));

    if compact {
        let key = if ctx.state.menu_open {
            "nav-menu-close"
        } else {
            "nav-menu-open"
        };
        top_bar = top_bar.push(
            button(text(ctx.i18n.tr(key)).size(typography::BODY))
                .style(styles::button::outline(ctx.colors))
                .padding([spacing::XXS, spacing::MD])
                .on_press(Message::ToggleMenu),
        );
    }

    let mut content = Column::new().width(Length::Fill).push(top_bar);
    if compact && ctx.state.menu_open {
        content = content.push(dropdown(ctx));
    }
    content.height(Length::Shrink).into()
}

fn links<'a>(ctx: &ViewContext<'a>) -> Vec<Element<'a, Message>> {
    SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            let key = section.nav_key()?;
            let active = ctx.state.active == Some(section);
            Some(
                button(text(ctx.i18n.tr(key)).size(typography::BODY))
                    .padding([spacing::XXS, 0.0])
                    .style(styles::button::nav_link(ctx.colors, active))
                    .on_press(Message::LinkPressed(section))
                    .into(),
            )
        })
        .collect()
}

fn theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // The label names the mode the toggle switches to.
    let key = if ctx.is_dark {
        "nav-theme-light"
    } else {
        "nav-theme-dark"
    };
    button(text(ctx.i18n.tr(key)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::outline(ctx.colors))
        .on_press(Message::ToggleTheme)
        .into()
}

fn dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let column = links(ctx)
        .into_iter()
        .fold(Column::new().spacing(spacing::SM), |column, link| {
            column.push(link)
        });

    Container::new(column)
        .padding([spacing::MD, spacing::XXL])
        .width(Length::Fill)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(colors.surface_navbar)),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: colors.brand_muted,
            },
            ..Default::default()
        })
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for the different
//! parts of the page. `App::update` builds an [`UpdateContext`] and routes
//! each message to one of them.

use super::{Message, Screen};
use crate::config;
use crate::content::Portfolio;
use crate::ui::carousel;
use crate::ui::loader;
use crate::ui::motion::{HoverAnimator, Motion, RevealTracker};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::sections::{self, contact, PageLayout, SectionId};
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Size, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Id of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "page";

/// Last known geometry of the page scrollable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub config_dir: &'a Option<PathBuf>,
    pub theme_mode: &'a mut ThemeMode,
    pub motion: &'a Motion,
    pub portfolio: &'a Portfolio,
    pub loader: &'a mut loader::State,
    pub navbar: &'a mut navbar::State,
    pub layout: &'a PageLayout,
    pub scroll: &'a mut ScrollMetrics,
    pub reveals: &'a mut RevealTracker<SectionId>,
    pub hover: &'a mut HoverAnimator,
    pub carousel: &'a mut carousel::State,
    pub contact: &'a mut contact::State,
    pub notice: &'a mut Option<String>,
    pub now: Instant,
}

/// Routes a top-level message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar_message(ctx, message),
        Message::Section(message) => handle_section_message(ctx, message),
        Message::Carousel(message) => handle_carousel_message(ctx, message),
        Message::Scrolled(viewport) => {
            handle_scroll(
                ctx,
                ScrollMetrics {
                    offset_y: viewport.absolute_offset().y,
                    viewport_height: viewport.bounds().height,
                    content_height: viewport.content_bounds().height,
                },
            );
            Task::none()
        }
        Message::WindowResized(size) => {
            handle_window_resized(ctx, size);
            Task::none()
        }
        Message::Tick(_) => {
            if *ctx.screen == Screen::Portfolio {
                handle_carousel_message(ctx, carousel::Message::Tick)
            } else {
                Task::none()
            }
        }
        Message::LoaderStep => {
            ctx.loader.step();
            Task::none()
        }
        Message::LoaderFinished => {
            handle_loader_finished(ctx);
            Task::none()
        }
        Message::DismissNotice => {
            *ctx.notice = None;
            Task::none()
        }
        Message::WindowCloseRequested(id) => handle_close_request(ctx, id),
    }
}

/// Handles navbar component messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.navbar) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(section) => scroll_to(ctx, section),
        NavbarEvent::ScrollToTop => operation::snap_to(
            Id::new(PAGE_SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: 0.0 },
        ),
        NavbarEvent::ThemeToggled => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            tracing::info!(theme = ?ctx.theme_mode, "theme toggled");
            if let Some(key) = persist_theme_mode(*ctx.theme_mode, ctx.config_dir.clone()) {
                *ctx.notice = Some(key.to_string());
            }
            Task::none()
        }
    }
}

/// Handles messages emitted by section views.
pub fn handle_section_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::Hover(key, true) => {
            ctx.hover.enter(key, ctx.now, ctx.motion);
            Task::none()
        }
        sections::Message::Hover(key, false) => {
            ctx.hover.leave(key, ctx.now, ctx.motion);
            Task::none()
        }
        sections::Message::Navigate(section) => {
            ctx.navbar.active = section.nav_key().map(|_| section);
            scroll_to(ctx, section)
        }
        sections::Message::Contact(message) => {
            match ctx.contact.handle(message) {
                contact::Event::None => {}
                contact::Event::Validated => tracing::info!("contact form validated"),
                contact::Event::Rejected => tracing::debug!("contact form has errors"),
            }
            Task::none()
        }
    }
}

/// Forwards a message to the carousel once it is mounted.
pub fn handle_carousel_message(
    ctx: &mut UpdateContext<'_>,
    message: carousel::Message,
) -> Task<Message> {
    if !ctx.carousel.is_mounted() {
        return Task::none();
    }
    ctx.carousel.handle(message, ctx.now, ctx.motion);
    Task::none()
}

/// Updates navbar state and section reveals from the scroll position.
pub fn handle_scroll(ctx: &mut UpdateContext<'_>, metrics: ScrollMetrics) {
    *ctx.scroll = metrics;
    ctx.navbar.on_scroll(metrics.offset_y, ctx.layout);
    observe_sections(ctx);
}

/// Tracks the window height until the scrollable reports its own viewport.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    ctx.scroll.viewport_height = size.height;
    if *ctx.screen == Screen::Portfolio {
        observe_sections(ctx);
    }
}

/// Switches from the splash to the page and starts the carousel.
pub fn handle_loader_finished(ctx: &mut UpdateContext<'_>) {
    if *ctx.screen != Screen::Loading {
        return;
    }
    tracing::info!(progress = ctx.loader.percent(), "loader finished");
    *ctx.screen = Screen::Portfolio;
    ctx.carousel.mount(ctx.now);
    observe_sections(ctx);
}

/// Stops the carousel before closing the window.
pub fn handle_close_request(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    tracing::info!("window close requested");
    ctx.carousel.unmount();
    window::close(id)
}

fn observe_sections(ctx: &mut UpdateContext<'_>) {
    for section in SectionId::ALL {
        let fraction =
            ctx.layout
                .visible_fraction(section, ctx.scroll.offset_y, ctx.scroll.viewport_height);
        ctx.reveals.observe(
            section,
            fraction,
            section.reveal_items(ctx.portfolio),
            ctx.motion.reveal_amount(),
            ctx.now,
        );
    }
}

fn scroll_to(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    let content_height = ctx.scroll.content_height.max(ctx.layout.total_height());
    let y = ctx
        .layout
        .relative_offset(section, content_height, ctx.scroll.viewport_height);
    tracing::debug!(section = section.anchor(), y, "scrolling to section");
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
}

/// Persists the theme mode to the config file, keeping every other setting.
///
/// A file that fails to load is left untouched so that a toggle never
/// replaces the user's settings with defaults. Returns the notice to show
/// when the choice could not be saved. Unit tests only write to an explicit
/// directory.
fn persist_theme_mode(
    theme_mode: ThemeMode,
    config_dir: Option<PathBuf>,
) -> Option<&'static str> {
    if cfg!(test) && config_dir.is_none() {
        return None;
    }

    let (mut cfg, warning) = config::load_with_override(config_dir.clone());
    if warning.is_some() {
        tracing::warn!("config file is unreadable; theme choice not saved");
        return Some("notification-config-save-skipped");
    }
    cfg.general.theme_mode = theme_mode;

    if let Err(error) = config::save_with_override(&cfg, config_dir) {
        tracing::warn!(%error, "failed to save config");
        return Some("notification-config-save-error");
    }
    None
}

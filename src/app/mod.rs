// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the loader and the page.
//!
//! The `App` struct wires together the domains (content, localization,
//! motion, carousel) and translates messages into side effects like config
//! persistence or scrolling. Boot is the single place where the motion
//! runtime is initialized and the configuration is read.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use update::ScrollMetrics;

use crate::content::{self, Portfolio};
use crate::i18n::I18n;
use crate::ui::carousel;
use crate::ui::loader;
use crate::ui::motion::{HoverAnimator, Motion, MotionSettings, RevealTracker};
use crate::ui::navbar;
use crate::ui::sections::{contact, PageLayout, SectionId};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    /// Effective darkness of `theme_mode`, resolved once per change.
    is_dark: bool,
    motion: Motion,
    portfolio: Portfolio,
    loader: loader::State,
    navbar: navbar::State,
    layout: PageLayout,
    scroll: ScrollMetrics,
    reveals: RevealTracker<SectionId>,
    hover: HoverAnimator,
    carousel: carousel::State,
    contact: contact::State,
    /// Translation key of a dismissible warning shown under the navbar.
    notice: Option<String>,
    /// Time of the message being processed; views render at this instant.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("active_testimonial", &self.carousel.active_index())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
///
/// Close requests are routed through `App::update` so the carousel is
/// unmounted before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            tracing::warn!("boot called more than once, using default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, translations and content, initializes the motion
    /// runtime, then starts the loader delay.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = Self::boot(flags, Instant::now());
        let task = Task::perform(
            async { tokio::time::sleep(crate::config::LOADER_DURATION).await },
            |()| Message::LoaderFinished,
        );
        (app, task)
    }

    fn boot(flags: Flags, now: Instant) -> Self {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        let motion = Motion::init(MotionSettings::from_config(&config));

        let content_path = flags.content_path.or_else(|| config.content.path.clone());
        let (portfolio, content_warning) = content::load(content_path.as_deref());

        let carousel = carousel::State::new(
            portfolio.testimonials.len(),
            carousel::Settings::from_config(&config),
        );

        tracing::info!(
            locale = %i18n.current_locale(),
            testimonials = portfolio.testimonials.len(),
            reduced_motion = motion.reduced_motion(),
            "portfolio booted"
        );

        let theme_mode = config.general.theme_mode;
        Self {
            i18n,
            screen: Screen::Loading,
            config_dir: flags.config_dir,
            theme_mode,
            is_dark: theme_mode.is_dark(),
            motion,
            portfolio,
            loader: loader::State::new(now),
            navbar: navbar::State::default(),
            layout: PageLayout::default(),
            scroll: ScrollMetrics::default(),
            reveals: RevealTracker::new(),
            hover: HoverAnimator::new(),
            carousel,
            contact: contact::State::default(),
            notice: content_warning.map(str::to_string).or(config_warning),
            now,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.portfolio.profile.name.is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", self.portfolio.profile.name)
        }
    }

    fn colors(&self) -> ColorScheme {
        if self.is_dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    fn theme(&self) -> Theme {
        let name = if self.is_dark {
            "IcedFolio Dark"
        } else {
            "IcedFolio Light"
        };
        self.colors().to_theme(name)
    }

    fn is_animating(&self) -> bool {
        self.carousel.is_animating(self.now)
            || self.hover.is_animating(self.now)
            || self.reveals.is_animating(self.now, &self.motion)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let loader_sub = subscription::create_loader_subscription(self.screen);
        let tick_sub = if self.screen == Screen::Portfolio {
            subscription::create_tick_subscription(
                self.is_animating(),
                self.carousel.autoplay_running(),
            )
        } else {
            Subscription::none()
        };

        Subscription::batch([event_sub, loader_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Tick(instant) => *instant,
            _ => Instant::now(),
        };
        let theme_mode = self.theme_mode;

        let task = update::update(&mut self.context(), message);

        if self.theme_mode != theme_mode {
            self.is_dark = self.theme_mode.is_dark();
        }
        task
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            config_dir: &self.config_dir,
            theme_mode: &mut self.theme_mode,
            motion: &self.motion,
            portfolio: &self.portfolio,
            loader: &mut self.loader,
            navbar: &mut self.navbar,
            layout: &self.layout,
            scroll: &mut self.scroll,
            reveals: &mut self.reveals,
            hover: &mut self.hover,
            carousel: &mut self.carousel,
            contact: &mut self.contact,
            notice: &mut self.notice,
            now: self.now,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            colors: self.colors(),
            is_dark: self.is_dark,
            motion: &self.motion,
            portfolio: &self.portfolio,
            loader: &self.loader,
            navbar: self.navbar,
            reveals: &self.reveals,
            hover: &self.hover,
            carousel: &self.carousel,
            contact: &self.contact,
            notice: self.notice.as_deref(),
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::motion::CardKey;
    use crate::ui::sections;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    fn booted(config: &str) -> (App, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("settings.toml"), config).expect("failed to write config");
        let flags = Flags {
            lang: Some("en-US".into()),
            config_dir: Some(dir.path().to_path_buf()),
            ..Flags::default()
        };
        (App::boot(flags, Instant::now()), dir)
    }

    fn shown(config: &str) -> (App, tempfile::TempDir) {
        let (mut app, dir) = booted(config);
        let _ = app.update(Message::LoaderFinished);
        (app, dir)
    }

    fn tick(app: &mut App, at: Instant) {
        let _ = app.update(Message::Tick(at));
    }

    #[test]
    fn new_starts_on_loader_with_carousel_unmounted() {
        let (app, _dir) = booted("");
        assert_eq!(app.screen, Screen::Loading);
        assert!(!app.carousel.is_mounted());
        assert!(app.notice.is_none());
    }

    #[test]
    fn loader_steps_and_finishes() {
        let (mut app, _dir) = booted("");
        let _ = app.update(Message::LoaderStep);
        assert_eq!(app.loader.percent(), 5);

        let _ = app.update(Message::LoaderFinished);
        assert_eq!(app.screen, Screen::Portfolio);
        assert!(app.carousel.is_mounted());

        let _ = app.update(Message::LoaderFinished);
        assert_eq!(app.screen, Screen::Portfolio);
    }

    #[test]
    fn arrow_messages_are_ignored_while_loading() {
        let (mut app, _dir) = booted("");
        let _ = app.update(Message::Carousel(carousel::Message::Next));
        assert_eq!(app.carousel.active_index(), Some(0));
    }

    #[test]
    fn carousel_messages_advance_once_shown() {
        let (mut app, _dir) = shown("");
        let _ = app.update(Message::Carousel(carousel::Message::Next));
        assert_eq!(app.carousel.active_index(), Some(1));
        let _ = app.update(Message::Carousel(carousel::Message::Jump(0)));
        assert_eq!(app.carousel.active_index(), Some(0));
    }

    #[test]
    fn autoplay_interval_comes_from_config() {
        let (mut app, _dir) = shown("[carousel]\nautoplay_interval_ms = 2000\n");
        let start = app.now;
        tick(&mut app, start + Duration::from_millis(1900));
        assert_eq!(app.carousel.active_index(), Some(0));
        tick(&mut app, start + Duration::from_millis(2000));
        assert_eq!(app.carousel.active_index(), Some(1));
    }

    #[test]
    fn disabled_autoplay_never_advances() {
        let (mut app, _dir) = shown("[carousel]\nautoplay = false\n");
        let start = app.now;
        tick(&mut app, start + Duration::from_secs(120));
        assert_eq!(app.carousel.active_index(), Some(0));
        assert!(!app.carousel.autoplay_running());
    }

    #[test]
    fn close_request_unmounts_carousel() {
        let (mut app, _dir) = shown("");
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(!app.carousel.is_mounted());

        let start = app.now;
        tick(&mut app, start + Duration::from_secs(60));
        assert_eq!(app.carousel.active_index(), Some(0));
    }

    #[test]
    fn scrolling_reveals_sections_and_updates_navbar() {
        let (mut app, _dir) = shown("");
        let projects = app.layout.top(SectionId::Projects).unwrap();
        let total = app.layout.total_height();

        update::handle_scroll(
            &mut app.context(),
            ScrollMetrics {
                offset_y: projects,
                viewport_height: 800.0,
                content_height: total,
            },
        );

        assert!(app.navbar.scrolled);
        assert_eq!(app.navbar.active, Some(SectionId::Projects));
        assert!(app.reveals.is_revealed(SectionId::Projects));
        assert!(!app.reveals.is_revealed(SectionId::Contact));
    }

    #[test]
    fn window_size_reveals_hero() {
        let (mut app, _dir) = shown("");
        let _ = app.update(Message::WindowResized(iced::Size::new(1280.0, 860.0)));
        assert!(app.reveals.is_revealed(SectionId::Hero));
    }

    #[test]
    fn theme_toggle_switches_to_explicit_mode() {
        let (mut app, _dir) = shown("[general]\ntheme_mode = \"dark\"\n");
        assert!(app.is_dark);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert!(!app.is_dark);
    }

    #[test]
    fn theme_toggle_keeps_other_settings() {
        let (mut app, dir) = shown(
            "[general]\nlanguage = \"fr\"\ntheme_mode = \"dark\"\n\
             [carousel]\nautoplay_interval_ms = 3000\n",
        );
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));

        let saved = crate::config::load_from_path(&dir.path().join("settings.toml"))
            .expect("saved config should parse");
        assert_eq!(saved.general.theme_mode, ThemeMode::Light);
        assert_eq!(saved.general.language.as_deref(), Some("fr"));
        assert_eq!(saved.carousel.autoplay_interval_ms, Some(3000));
        assert!(app.notice.is_none());
    }

    #[test]
    fn theme_toggle_leaves_unreadable_config_alone() {
        let original = "[general]\nlanguage = \"fr\"\n\
                        [carousel]\nautoplay = \"often\"\nautoplay_interval_ms = 3000\n";
        let (mut app, dir) = shown(original);
        let _ = app.update(Message::DismissNotice);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));

        let on_disk = fs::read_to_string(dir.path().join("settings.toml"))
            .expect("config should still exist");
        assert_eq!(on_disk, original);
        assert_eq!(app.notice.as_deref(), Some("notification-config-save-skipped"));
    }

    #[test]
    fn hover_starts_card_animation() {
        let (mut app, _dir) = shown("");
        let key = CardKey::Project(0);
        let _ = app.update(Message::Section(sections::Message::Hover(key, true)));
        assert!(app.hover.is_animating(app.now));
    }

    #[test]
    fn invalid_config_shows_notice_until_dismissed() {
        let (mut app, _dir) = booted("[carousel]\nautoplay = \"often\"\n");
        assert_eq!(app.notice.as_deref(), Some("notification-config-load-error"));
        let _ = app.update(Message::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn missing_content_override_falls_back_with_notice() {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(dir.path().to_path_buf()),
            content_path: Some(dir.path().join("missing.toml")),
            ..Flags::default()
        };
        let app = App::boot(flags, Instant::now());
        assert!(!app.portfolio.testimonials.is_empty());
        assert!(app.notice.is_some());
    }

    #[test]
    fn contact_submit_validates_form() {
        let (mut app, _dir) = shown("");
        for (field, value) in [
            (contact::Field::Name, "Ada"),
            (contact::Field::Email, "ada@example.com"),
            (contact::Field::Message, "Hello"),
        ] {
            let _ = app.update(Message::Section(sections::Message::Contact(
                contact::Message::Edited(field, value.to_string()),
            )));
        }
        let _ = app.update(Message::Section(sections::Message::Contact(
            contact::Message::Submit,
        )));
        assert!(app.contact.is_validated());
    }

    #[test]
    fn title_includes_owner_name() {
        let (app, _dir) = booted("");
        assert!(app.title().contains(&app.portfolio.profile.name));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::carousel;
use crate::ui::navbar;
use crate::ui::sections;
use iced::widget::scrollable::Viewport;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Section(sections::Message),
    Carousel(carousel::Message),
    /// The page scrollable moved or was resized.
    Scrolled(Viewport),
    /// The window opened or was resized.
    WindowResized(Size),
    /// Frame or autoplay poll.
    Tick(Instant),
    /// One step of the startup progress bar.
    LoaderStep,
    /// The startup delay elapsed.
    LoaderFinished,
    DismissNotice,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Optional portfolio content file replacing the embedded one.
    pub content_path: Option<PathBuf>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}

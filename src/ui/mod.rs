// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`loader`] - Startup splash with progress bar
//! - [`sections`] - The single scrolling page and its sections
//!
//! # Components
//!
//! - [`carousel`] - Testimonial carousel (index, autoplay, swipe, transitions)
//! - [`navbar`] - Section links, scroll-spy and theme toggle
//! - [`motion`] - Easing, tweens, scroll reveals and hover animations
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod loader;
pub mod motion;
pub mod navbar;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;

// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.
//!
//! Style builders take the active [`ColorScheme`](crate::ui::theming::ColorScheme)
//! by value and return the closure iced expects, so views never hard-code colors.

pub mod button;
pub mod container;
pub mod text_input;

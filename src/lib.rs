// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is an animated single-page portfolio built with the Iced GUI framework.
//!
//! The page is a stack of sections (hero, about, experience, projects,
//! skills, testimonials, contact) with scroll reveals and hover animations.
//! Its stateful core is the testimonial carousel in [`ui::carousel`]: one
//! active index driven by buttons, arrow keys, swipes and an autoplay timer.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;

pub use app::config;

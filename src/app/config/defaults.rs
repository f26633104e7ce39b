// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: Autoplay interval and swipe threshold bounds
//! - **Motion**: Scroll reveal threshold and animation timings
//! - **Loader**: Startup splash duration and progress steps
//! - **Navbar**: Scroll offsets driving the navbar state

use std::time::Duration;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default autoplay interval between two automatic advances (milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 8000;

/// Minimum autoplay interval (milliseconds).
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum autoplay interval (milliseconds).
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

/// Default horizontal displacement a swipe must exceed (logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 80.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 400.0;

/// Polling period of the autoplay timer while the carousel is mounted.
pub const AUTOPLAY_POLL_PERIOD: Duration = Duration::from_millis(100);

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Default fraction of a section that must be visible before it reveals.
pub const DEFAULT_REVEAL_AMOUNT: f32 = 0.25;

/// Minimum reveal fraction.
pub const MIN_REVEAL_AMOUNT: f32 = 0.05;

/// Maximum reveal fraction.
pub const MAX_REVEAL_AMOUNT: f32 = 1.0;

/// Frame period used while an animation is in flight (~60 Hz).
pub const ANIMATION_FRAME_PERIOD: Duration = Duration::from_millis(16);

// ==========================================================================
// Loader Defaults
// ==========================================================================

/// How long the startup splash stays on screen.
pub const LOADER_DURATION: Duration = Duration::from_millis(2000);

/// Progress bar step period of the startup splash.
pub const LOADER_STEP_PERIOD: Duration = Duration::from_millis(100);

/// Progress added per step (percent).
pub const LOADER_STEP_PERCENT: u8 = 5;

// ==========================================================================
// Navbar Defaults
// ==========================================================================

/// Page offset past which the navbar switches to its "scrolled" look.
pub const NAVBAR_SCROLLED_OFFSET: f32 = 100.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Autoplay validation
    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(MAX_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);

    // Swipe validation
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(MAX_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    // Reveal validation
    assert!(MIN_REVEAL_AMOUNT > 0.0);
    assert!(MAX_REVEAL_AMOUNT <= 1.0);
    assert!(DEFAULT_REVEAL_AMOUNT >= MIN_REVEAL_AMOUNT);
    assert!(DEFAULT_REVEAL_AMOUNT <= MAX_REVEAL_AMOUNT);

    // Loader validation: the bar must be full when the splash ends
    assert!(LOADER_STEP_PERCENT > 0);
    assert!(
        (LOADER_DURATION.as_millis() / LOADER_STEP_PERIOD.as_millis())
            * LOADER_STEP_PERCENT as u128
            >= 100
    );
};

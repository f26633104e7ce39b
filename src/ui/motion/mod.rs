// SPDX-License-Identifier: MPL-2.0
//! Animation runtime shared by every animated component.
//!
//! [`Motion::init`] is called once while the application boots and the
//! resulting value is handed to each component that animates. It carries the
//! user's reduced-motion preference and the scroll reveal threshold, and it
//! is the only place where durations are turned into [`Timing`]s, so turning
//! reduced motion on collapses every animation to an instant change.

pub mod easing;
pub mod hover;
pub mod reveal;
pub mod tween;

pub use easing::Easing;
pub use hover::{CardKey, HoverAnimator, HoverVisual};
pub use reveal::{RevealAmount, RevealTracker, RevealVisual};
pub use tween::{Interpolate, Tween};

use crate::config::Config;
use std::time::Duration;

/// Delay, duration and curve of one animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Timing {
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// No delay, no duration.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

/// User-facing animation preferences.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionSettings {
    pub reduced_motion: bool,
    pub reveal_amount: RevealAmount,
}

impl MotionSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            reduced_motion: config.motion.reduced_motion.unwrap_or(false),
            reveal_amount: config
                .motion
                .reveal_amount
                .map(RevealAmount::new)
                .unwrap_or_default(),
        }
    }
}

/// Initialized animation runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    settings: MotionSettings,
}

impl Motion {
    /// Sets up the animation runtime. Called once by the application boot.
    #[must_use]
    pub fn init(settings: MotionSettings) -> Self {
        tracing::debug!(
            reduced_motion = settings.reduced_motion,
            reveal_amount = settings.reveal_amount.value(),
            "motion initialized"
        );
        Self { settings }
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.settings.reduced_motion
    }

    #[must_use]
    pub fn reveal_amount(&self) -> RevealAmount {
        self.settings.reveal_amount
    }

    /// Timing for an animation of `duration`, or an instant one under reduced motion.
    #[must_use]
    pub fn timing(&self, duration: Duration, easing: Easing) -> Timing {
        if self.settings.reduced_motion {
            Timing::instant()
        } else {
            Timing::new(duration, easing)
        }
    }

    /// Same as [`Motion::timing`] with a start delay.
    #[must_use]
    pub fn delayed(&self, delay: Duration, duration: Duration, easing: Easing) -> Timing {
        if self.settings.reduced_motion {
            Timing::instant()
        } else {
            Timing::new(duration, easing).with_delay(delay)
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::init(MotionSettings::default())
    }
}

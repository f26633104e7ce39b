// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveals.
//!
//! A section is revealed the first time enough of it enters the viewport.
//! Its items then fade and slide in one after the other. A revealed section
//! never hides again, so reveals play exactly once per session.

use super::{Easing, Motion, Timing};
use crate::config::{DEFAULT_REVEAL_AMOUNT, MAX_REVEAL_AMOUNT, MIN_REVEAL_AMOUNT};
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Duration of one item's entrance.
pub const REVEAL_DURATION: Duration = Duration::from_millis(800);

/// Delay between two consecutive items of a section.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(150);

/// Vertical offset items slide in from.
pub const REVEAL_OFFSET: f32 = 50.0;

/// Visible fraction of a section that triggers its reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealAmount(f32);

impl RevealAmount {
    /// Creates a new fraction, clamping to valid range. NaN falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_REVEAL_AMOUNT, MAX_REVEAL_AMOUNT))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for RevealAmount {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_AMOUNT)
    }
}

/// How a revealed item is drawn at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealVisual {
    pub opacity: f32,
    /// Downward offset still to travel.
    pub offset: f32,
}

impl RevealVisual {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset: REVEAL_OFFSET,
    };

    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset: 0.0,
    };
}

#[derive(Debug, Clone, Copy)]
struct Revealed {
    at: Instant,
    items: usize,
}

/// Remembers which sections have been revealed and when.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    revealed: HashMap<K, Revealed>,
}

impl<K: Copy + Eq + Hash + std::fmt::Debug> RevealTracker<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            revealed: HashMap::new(),
        }
    }

    #[must_use]
    pub fn is_revealed(&self, key: K) -> bool {
        self.revealed.contains_key(&key)
    }

    /// Reports the visible fraction of `key`.
    ///
    /// Returns `true` only for the observation that reveals the section.
    pub fn observe(
        &mut self,
        key: K,
        visible_fraction: f32,
        items: usize,
        amount: RevealAmount,
        now: Instant,
    ) -> bool {
        if self.revealed.contains_key(&key) || visible_fraction < amount.value() {
            return false;
        }
        tracing::debug!(section = ?key, visible_fraction, "section revealed");
        self.revealed.insert(key, Revealed { at: now, items });
        true
    }

    /// Visual of the `item`-th element of `key` at `now`.
    #[must_use]
    pub fn item_visual(&self, key: K, item: usize, now: Instant, motion: &Motion) -> RevealVisual {
        let Some(revealed) = self.revealed.get(&key) else {
            return RevealVisual::HIDDEN;
        };
        let timing = item_timing(item, motion);
        let elapsed = now.saturating_duration_since(revealed.at);
        if elapsed < timing.delay {
            return RevealVisual::HIDDEN;
        }
        let running = elapsed - timing.delay;
        if timing.duration.is_zero() || running >= timing.duration {
            return RevealVisual::SHOWN;
        }
        let t = timing
            .easing
            .apply(running.as_secs_f32() / timing.duration.as_secs_f32());
        RevealVisual {
            opacity: t,
            offset: REVEAL_OFFSET * (1.0 - t),
        }
    }

    /// True while any revealed section still has items entering.
    #[must_use]
    pub fn is_animating(&self, now: Instant, motion: &Motion) -> bool {
        self.revealed.values().any(|revealed| {
            let last = revealed.items.saturating_sub(1);
            now.saturating_duration_since(revealed.at) < item_timing(last, motion).total()
        })
    }
}

impl<K: Copy + Eq + Hash + std::fmt::Debug> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn item_timing(item: usize, motion: &Motion) -> Timing {
    let stagger = REVEAL_STAGGER.saturating_mul(u32::try_from(item).unwrap_or(u32::MAX));
    motion.delayed(stagger, REVEAL_DURATION, Easing::Power3Out)
}

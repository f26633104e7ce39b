// SPDX-License-Identifier: MPL-2.0
//! Hover lift for service and project cards.

use super::{Easing, Interpolate, Motion, Tween};
use std::collections::HashMap;
use std::time::{Duration, Instant};

const ENTER_DURATION: Duration = Duration::from_millis(300);
const LEAVE_DURATION: Duration = Duration::from_millis(500);

/// Identifies a hoverable card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKey {
    Service(usize),
    Project(usize),
}

/// Target look of a card, independent of how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverVisual {
    /// Upward displacement.
    pub lift: f32,
    /// Strength of the brand-tinted shadow, 0 to 1.
    pub glow: f32,
}

impl HoverVisual {
    #[must_use]
    pub const fn resting() -> Self {
        Self {
            lift: 0.0,
            glow: 0.0,
        }
    }

    #[must_use]
    pub const fn hovered() -> Self {
        Self {
            lift: 10.0,
            glow: 1.0,
        }
    }
}

impl Interpolate for HoverVisual {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Self {
            lift: self.lift.interpolate(&other.lift, t),
            glow: self.glow.interpolate(&other.glow, t),
        }
    }
}

/// Per-card hover tweens. Cards never hovered are absent and draw at rest.
#[derive(Debug, Clone, Default)]
pub struct HoverAnimator {
    cards: HashMap<CardKey, Tween<HoverVisual>>,
}

impl HoverAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, key: CardKey, now: Instant, motion: &Motion) {
        let timing = motion.timing(ENTER_DURATION, Easing::Power2Out);
        self.cards
            .entry(key)
            .or_default()
            .retarget(HoverVisual::hovered(), now, timing);
    }

    pub fn leave(&mut self, key: CardKey, now: Instant, motion: &Motion) {
        let timing = motion.timing(LEAVE_DURATION, Easing::Power3Out);
        if let Some(tween) = self.cards.get_mut(&key) {
            tween.retarget(HoverVisual::resting(), now, timing);
        }
    }

    #[must_use]
    pub fn visual(&self, key: CardKey, now: Instant) -> HoverVisual {
        self.cards
            .get(&key)
            .map_or(HoverVisual::resting(), |tween| tween.value_at(now))
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.cards.values().any(|tween| !tween.is_settled(now))
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Card transitions driven by changes of the active index.
//!
//! What a card looks like in each role is a plain table ([`CardVisual::for_role`]);
//! how it gets there is a set of per-card tweens. The view only asks for the
//! interpolated [`CardVisual`] of a card at a given instant.

use super::controller::{ChangeCause, IndexChange};
use crate::ui::motion::{Easing, Interpolate, Motion, Tween};
use std::time::{Duration, Instant};

/// Duration of the entrance of the newly active card.
pub const ACTIVATE_DURATION: Duration = Duration::from_millis(500);

/// Duration of the exit of the previously active card.
pub const DEACTIVATE_DURATION: Duration = Duration::from_millis(300);

/// Horizontal distance the newly active card enters from.
pub const ENTRY_OFFSET: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    Active,
    Inactive,
}

/// Renderer-independent look of a testimonial card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub scale: f32,
    pub opacity: f32,
    /// Shadow strength, 0 to 1.
    pub shadow: f32,
    /// Border highlight, 0 (muted) to 1 (brand color).
    pub highlight: f32,
    /// Horizontal displacement from the card's resting place.
    pub offset_x: f32,
}

impl CardVisual {
    #[must_use]
    pub const fn for_role(role: CardRole) -> Self {
        match role {
            CardRole::Active => Self {
                scale: 1.05,
                opacity: 1.0,
                shadow: 1.0,
                highlight: 1.0,
                offset_x: 0.0,
            },
            CardRole::Inactive => Self {
                scale: 0.95,
                opacity: 0.7,
                shadow: 0.2,
                highlight: 0.0,
                offset_x: 0.0,
            },
        }
    }
}

impl Interpolate for CardVisual {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Self {
            scale: self.scale.interpolate(&other.scale, t),
            opacity: self.opacity.interpolate(&other.opacity, t),
            shadow: self.shadow.interpolate(&other.shadow, t),
            highlight: self.highlight.interpolate(&other.highlight, t),
            offset_x: self.offset_x.interpolate(&other.offset_x, t),
        }
    }
}

/// One tween per card plus the index currently entering.
#[derive(Debug, Clone)]
pub struct Animator {
    cards: Vec<Tween<CardVisual>>,
    animating: Option<usize>,
}

impl Animator {
    /// All cards rest inactive except `active`.
    #[must_use]
    pub fn new(count: usize, active: Option<usize>) -> Self {
        let cards = (0..count)
            .map(|i| {
                let role = if Some(i) == active {
                    CardRole::Active
                } else {
                    CardRole::Inactive
                };
                Tween::new(CardVisual::for_role(role))
            })
            .collect();
        Self {
            cards,
            animating: None,
        }
    }

    /// Index whose entrance is in flight, if any.
    #[must_use]
    pub fn animating_index(&self) -> Option<usize> {
        self.animating
    }

    /// Retargets the two cards involved in `change`.
    pub fn on_change(&mut self, change: IndexChange, now: Instant, motion: &Motion) {
        if change.from == change.to || change.to >= self.cards.len() {
            return;
        }

        if let Some(leaving) = self.cards.get_mut(change.from) {
            leaving.retarget(
                CardVisual::for_role(CardRole::Inactive),
                now,
                motion.timing(DEACTIVATE_DURATION, Easing::EaseOut),
            );
        }

        let entering = &mut self.cards[change.to];
        let target = CardVisual::for_role(CardRole::Active);
        let timing = motion.timing(ACTIVATE_DURATION, Easing::EaseOut);
        if entering.is_settled(now) {
            let mut start = entering.value_at(now);
            start.offset_x = entry_side(change) * ENTRY_OFFSET;
            entering.animate(start, target, now, timing);
        } else {
            entering.retarget(target, now, timing);
        }
        self.animating = Some(change.to);
    }

    /// Interpolated visual of card `index` at `now`.
    #[must_use]
    pub fn visual(&self, index: usize, now: Instant) -> CardVisual {
        self.cards
            .get(index)
            .map_or(CardVisual::for_role(CardRole::Inactive), |tween| {
                tween.value_at(now)
            })
    }

    /// Clears the entering marker once every card has settled.
    pub fn settle(&mut self, now: Instant) {
        if !self.is_animating(now) {
            self.animating = None;
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.cards.iter().any(|tween| !tween.is_settled(now))
    }
}

/// +1 when the new card enters from the right, -1 from the left.
fn entry_side(change: IndexChange) -> f32 {
    match change.cause {
        ChangeCause::Next => 1.0,
        ChangeCause::Previous => -1.0,
        ChangeCause::Jump => {
            if change.to > change.from {
                1.0
            } else {
                -1.0
            }
        }
    }
}

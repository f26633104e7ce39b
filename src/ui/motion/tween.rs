// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation between two values.

use super::Timing;
use iced::Color;
use std::time::{Duration, Instant};

/// Values that can be blended linearly.
pub trait Interpolate: Clone {
    /// Returns the value at `t` between `self` (0.0) and `other` (1.0).
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Color {
            r: self.r.interpolate(&other.r, t),
            g: self.g.interpolate(&other.g, t),
            b: self.b.interpolate(&other.b, t),
            a: self.a.interpolate(&other.a, t),
        }
    }
}

/// A single animated value.
///
/// Retargeting while in flight starts from the value currently shown, so
/// the last target always wins and nothing is queued.
#[derive(Debug, Clone)]
pub struct Tween<T: Interpolate> {
    from: T,
    to: T,
    start: Option<Instant>,
    timing: Timing,
}

impl<T: Interpolate> Tween<T> {
    /// Creates a tween resting at `value`.
    pub fn new(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            start: None,
            timing: Timing::instant(),
        }
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    /// Starts moving towards `to` from the value shown at `now`.
    pub fn retarget(&mut self, to: T, now: Instant, timing: Timing) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = Some(now);
        self.timing = timing;
    }

    /// Starts moving from `from` to `to`, discarding the current value.
    pub fn animate(&mut self, from: T, to: T, now: Instant, timing: Timing) {
        self.from = from;
        self.to = to;
        self.start = Some(now);
        self.timing = timing;
    }

    /// Eased progress in `0.0..=1.0` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(start) = self.start else {
            return 1.0;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.timing.delay {
            return 0.0;
        }
        let running = elapsed - self.timing.delay;
        if self.timing.duration.is_zero() || running >= self.timing.duration {
            return 1.0;
        }
        self.timing
            .easing
            .apply(running.as_secs_f32() / self.timing.duration.as_secs_f32())
    }

    pub fn value_at(&self, now: Instant) -> T {
        let t = self.progress(now);
        if t >= 1.0 {
            self.to.clone()
        } else {
            self.from.interpolate(&self.to, t)
        }
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        match self.start {
            None => true,
            Some(start) => {
                now.saturating_duration_since(start) >= self.timing.delay + self.timing.duration
            }
        }
    }

    /// Time left until the tween settles.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.start {
            None => Duration::ZERO,
            Some(start) => (self.timing.delay + self.timing.duration)
                .saturating_sub(now.saturating_duration_since(start)),
        }
    }
}

impl<T: Interpolate + Default> Default for Tween<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::motion::Easing;

    fn linear(ms: u64) -> Timing {
        Timing::new(Duration::from_millis(ms), Easing::Linear)
    }

    #[test]
    fn new_tween_is_settled() {
        let tween = Tween::new(3.0_f32);
        let now = Instant::now();
        assert!(tween.is_settled(now));
        assert_eq!(tween.value_at(now), 3.0);
    }

    #[test]
    fn linear_tween_interpolates() {
        let start = Instant::now();
        let mut tween = Tween::new(0.0_f32);
        tween.retarget(100.0, start, linear(1000));

        let half = tween.value_at(start + Duration::from_millis(500));
        assert!((half - 50.0).abs() < 0.01);
        assert!(!tween.is_settled(start + Duration::from_millis(999)));
        assert!(tween.is_settled(start + Duration::from_millis(1000)));
        assert_eq!(tween.value_at(start + Duration::from_secs(5)), 100.0);
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_value() {
        let start = Instant::now();
        let mut tween = Tween::new(0.0_f32);
        tween.retarget(100.0, start, linear(1000));

        let midway = start + Duration::from_millis(250);
        tween.retarget(0.0, midway, linear(1000));

        let resumed = tween.value_at(midway);
        assert!((resumed - 25.0).abs() < 0.01);
        assert_eq!(*tween.target(), 0.0);
    }

    #[test]
    fn delay_holds_initial_value() {
        let start = Instant::now();
        let mut tween = Tween::new(0.0_f32);
        tween.retarget(1.0, start, linear(100).with_delay(Duration::from_millis(300)));

        assert_eq!(tween.value_at(start + Duration::from_millis(299)), 0.0);
        assert!(!tween.is_settled(start + Duration::from_millis(350)));
        assert!(tween.is_settled(start + Duration::from_millis(400)));
    }

    #[test]
    fn zero_duration_reaches_target_immediately() {
        let start = Instant::now();
        let mut tween = Tween::new(0.0_f32);
        tween.retarget(1.0, start, Timing::instant());
        assert_eq!(tween.value_at(start), 1.0);
        assert!(tween.is_settled(start));
    }

    #[test]
    fn colors_interpolate_per_channel() {
        let black = Color::from_rgba(0.0, 0.0, 0.0, 0.0);
        let white = Color::WHITE;
        let grey = black.interpolate(&white, 0.5);
        assert!((grey.r - 0.5).abs() < 1e-6);
        assert!((grey.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn remaining_counts_down() {
        let start = Instant::now();
        let mut tween = Tween::new(0.0_f32);
        tween.retarget(1.0, start, linear(500));
        assert_eq!(
            tween.remaining(start + Duration::from_millis(200)),
            Duration::from_millis(300)
        );
        assert_eq!(tween.remaining(start + Duration::from_secs(1)), Duration::ZERO);
    }
}

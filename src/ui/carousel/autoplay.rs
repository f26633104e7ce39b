// SPDX-License-Identifier: MPL-2.0
//! Timed automatic advance of the carousel.
//!
//! The timer itself is an iced subscription owned by the application; this
//! module only decides, on each poll, whether an advance is due. Time is
//! always passed in explicitly so tests can simulate it.

use crate::config::{
    AUTOPLAY_POLL_PERIOD, DEFAULT_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS,
    MIN_AUTOPLAY_INTERVAL_MS,
};
use std::time::{Duration, Instant};

/// Interval between automatic advances, clamped to the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayInterval(u64);

impl AutoplayInterval {
    /// Creates a new interval in milliseconds, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}

/// Autoplay timer state.
///
/// `last_advance` is `None` while unmounted; a tick can only advance when
/// the carousel is mounted and autoplay is enabled.
#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: AutoplayInterval,
    enabled: bool,
    last_advance: Option<Instant>,
}

impl Autoplay {
    #[must_use]
    pub fn new(interval: AutoplayInterval, enabled: bool) -> Self {
        Self {
            interval,
            enabled,
            last_advance: None,
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.last_advance.is_some()
    }

    /// True while ticks may advance the carousel.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.enabled && self.is_mounted()
    }

    /// Starts counting from `now`.
    pub fn mount(&mut self, now: Instant) {
        self.last_advance = Some(now);
    }

    /// Cancels the timer. Later ticks are ignored until the next mount.
    pub fn unmount(&mut self) {
        self.last_advance = None;
    }

    /// Restarts the interval after a manual interaction.
    pub fn reset(&mut self, now: Instant) {
        if self.last_advance.is_some() {
            self.last_advance = Some(now);
        }
    }

    /// Returns `true` when a full interval has elapsed since the last advance.
    ///
    /// A tick that lands within one poll of the due time keeps the schedule
    /// anchored on the due time, so late polls do not accumulate. A longer
    /// gap restarts the interval from `now` instead of firing a burst.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(last) = self.last_advance else {
            return false;
        };
        let due = last + self.interval.as_duration();
        if now < due {
            return false;
        }
        self.last_advance = if now.duration_since(due) < AUTOPLAY_POLL_PERIOD {
            Some(due)
        } else {
            Some(now)
        };
        true
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(AutoplayInterval::default(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLL: Duration = Duration::from_millis(100);

    fn count_advances(autoplay: &mut Autoplay, start: Instant, span: Duration) -> usize {
        let mut fired = 0;
        let mut elapsed = Duration::ZERO;
        while elapsed <= span {
            if autoplay.tick(start + elapsed) {
                fired += 1;
            }
            elapsed += POLL;
        }
        fired
    }

    #[test]
    fn interval_clamps_to_valid_range() {
        assert_eq!(AutoplayInterval::new(0).value(), MIN_AUTOPLAY_INTERVAL_MS);
        assert_eq!(
            AutoplayInterval::new(u64::MAX).value(),
            MAX_AUTOPLAY_INTERVAL_MS
        );
        assert_eq!(AutoplayInterval::new(5000).value(), 5000);
    }

    #[test]
    fn default_interval_is_eight_seconds() {
        assert_eq!(
            AutoplayInterval::default().as_duration(),
            Duration::from_secs(8)
        );
    }

    #[test]
    fn fires_once_per_interval_while_mounted() {
        let start = Instant::now();
        let mut autoplay = Autoplay::default();
        autoplay.mount(start);

        assert_eq!(count_advances(&mut autoplay, start, Duration::from_millis(7900)), 0);
        assert!(autoplay.tick(start + Duration::from_millis(8000)));
        assert!(!autoplay.tick(start + Duration::from_millis(8100)));
    }

    #[test]
    fn fires_three_times_over_three_intervals() {
        let start = Instant::now();
        let mut autoplay = Autoplay::new(AutoplayInterval::new(1000), true);
        autoplay.mount(start);
        assert_eq!(
            count_advances(&mut autoplay, start, Duration::from_millis(3050)),
            3
        );
    }

    #[test]
    fn late_polls_do_not_shift_the_schedule() {
        let start = Instant::now();
        let mut autoplay = Autoplay::new(AutoplayInterval::new(1000), true);
        autoplay.mount(start);

        assert!(autoplay.tick(start + Duration::from_millis(1050)));
        assert!(autoplay.tick(start + Duration::from_millis(2000)));
        assert!(!autoplay.tick(start + Duration::from_millis(2990)));
        assert!(autoplay.tick(start + Duration::from_millis(3090)));
        assert!(autoplay.tick(start + Duration::from_millis(4000)));
    }

    #[test]
    fn long_gap_restarts_from_the_late_tick() {
        let start = Instant::now();
        let mut autoplay = Autoplay::new(AutoplayInterval::new(1000), true);
        autoplay.mount(start);

        assert!(autoplay.tick(start + Duration::from_millis(5000)));
        assert!(!autoplay.tick(start + Duration::from_millis(5900)));
        assert!(autoplay.tick(start + Duration::from_millis(6000)));
    }

    #[test]
    fn never_fires_before_mount_or_after_unmount() {
        let start = Instant::now();
        let mut autoplay = Autoplay::default();
        assert!(!autoplay.tick(start + Duration::from_secs(60)));

        autoplay.mount(start);
        autoplay.unmount();
        assert_eq!(
            count_advances(&mut autoplay, start, Duration::from_secs(30)),
            0
        );
    }

    #[test]
    fn reset_postpones_next_advance() {
        let start = Instant::now();
        let mut autoplay = Autoplay::default();
        autoplay.mount(start);

        autoplay.reset(start + Duration::from_secs(5));
        assert!(!autoplay.tick(start + Duration::from_secs(8)));
        assert!(autoplay.tick(start + Duration::from_secs(13)));
    }

    #[test]
    fn reset_does_not_mount() {
        let mut autoplay = Autoplay::default();
        autoplay.reset(Instant::now());
        assert!(!autoplay.is_mounted());
    }

    #[test]
    fn disabled_autoplay_never_fires() {
        let start = Instant::now();
        let mut autoplay = Autoplay::new(AutoplayInterval::default(), false);
        autoplay.mount(start);
        assert!(!autoplay.is_running());
        assert!(!autoplay.tick(start + Duration::from_secs(60)));
    }
}

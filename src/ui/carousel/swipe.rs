// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection.

use crate::config::{DEFAULT_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD, MIN_SWIPE_THRESHOLD};

/// Displacement a swipe must exceed, clamped to the supported range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to valid range. NaN falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// Resolved direction of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left: show the next item.
    Left,
    /// Finger moved left to right: show the previous item.
    Right,
}

/// Start and end x of the gesture in progress.
#[derive(Debug, Clone, Default)]
pub struct SwipeGesture {
    threshold: SwipeThreshold,
    start_x: Option<f32>,
    end_x: Option<f32>,
}

impl SwipeGesture {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            start_x: None,
            end_x: None,
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    /// Records the latest pointer position. Ignored when no gesture started.
    pub fn update(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.end_x = Some(x);
        }
    }

    /// Finishes the gesture and resolves its direction.
    ///
    /// Returns `None` when the displacement does not strictly exceed the
    /// threshold, or when the pointer never moved.
    pub fn end(&mut self) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let end = self.end_x.take()?;
        let threshold = self.threshold.value();

        if start - end > threshold {
            Some(SwipeDirection::Left)
        } else if end - start > threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }
}

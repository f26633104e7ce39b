// SPDX-License-Identifier: MPL-2.0
//! Easing curves.

/// Easing function applied to a linear progress value.
///
/// The `Power*Out` names follow the usual animation-library convention where
/// `power2` is a cubic curve and `power3` a quartic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic deceleration.
    #[default]
    EaseOut,
    /// Cubic deceleration.
    Power2Out,
    /// Quartic deceleration.
    Power3Out,
    /// Cubic acceleration then deceleration.
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(2),
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

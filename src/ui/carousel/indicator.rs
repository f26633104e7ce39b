// SPDX-License-Identifier: MPL-2.0
//! Progress indicator derived from the active index.

/// Fill ratio and per-item markers of the progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// `(active + 1) / count`, or 0 for an empty sequence.
    pub fill: f32,
    /// One entry per item; `true` for the active one.
    pub markers: Vec<bool>,
}

#[must_use]
pub fn progress(active: Option<usize>, count: usize) -> Progress {
    match active {
        Some(active) if active < count => Progress {
            fill: (active + 1) as f32 / count as f32,
            markers: (0..count).map(|i| i == active).collect(),
        },
        _ => Progress {
            fill: 0.0,
            markers: Vec::new(),
        },
    }
}

/// 1-based position and total, e.g. `(2, 3)` for "2 / 3".
#[must_use]
pub fn label(active: Option<usize>, count: usize) -> Option<(usize, usize)> {
    active.filter(|&i| i < count).map(|i| (i + 1, count))
}

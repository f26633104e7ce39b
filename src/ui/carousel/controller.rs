// SPDX-License-Identifier: MPL-2.0
//! Active testimonial index.
//!
//! The controller is the single source of truth for which testimonial is
//! shown. Every other carousel part (autoplay, swipe, animator, indicator)
//! derives from the index kept here.

/// Why the active index changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Next,
    Previous,
    Jump,
}

/// A change of the active index, reported to the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub from: usize,
    pub to: usize,
    pub cause: ChangeCause,
}

/// Owns the active index over a sequence of `count` items.
///
/// The index wraps modulo `count` in both directions. An empty sequence has
/// no active index and every operation is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    active: usize,
    count: usize,
}

impl Controller {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the active index, or `None` for an empty sequence.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        (self.count > 0).then_some(self.active)
    }

    /// Moves to the following item, wrapping to 0 after the last one.
    pub fn next(&mut self) -> Option<IndexChange> {
        if self.count == 0 {
            return None;
        }
        let to = (self.active + 1) % self.count;
        Some(self.set(to, ChangeCause::Next))
    }

    /// Moves to the preceding item, wrapping to the last one from 0.
    pub fn previous(&mut self) -> Option<IndexChange> {
        if self.count == 0 {
            return None;
        }
        let to = (self.active + self.count - 1) % self.count;
        Some(self.set(to, ChangeCause::Previous))
    }

    /// Makes `index` active.
    ///
    /// Out-of-range indices are ignored. Jumping to the already active index
    /// is not a change. Both cases return `None`.
    pub fn jump(&mut self, index: usize) -> Option<IndexChange> {
        if index >= self.count || index == self.active {
            return None;
        }
        Some(self.set(index, ChangeCause::Jump))
    }

    fn set(&mut self, to: usize, cause: ChangeCause) -> IndexChange {
        let from = self.active;
        self.active = to;
        IndexChange { from, to, cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_after_last() {
        let mut controller = Controller::new(3);
        controller.next();
        controller.next();
        assert_eq!(controller.active_index(), Some(2));
        let change = controller.next().expect("non-empty sequence advances");
        assert_eq!(change.from, 2);
        assert_eq!(change.to, 0);
        assert_eq!(change.cause, ChangeCause::Next);
    }

    #[test]
    fn previous_wraps_from_first() {
        let mut controller = Controller::new(3);
        let change = controller.previous().expect("non-empty sequence moves");
        assert_eq!(change.to, 2);
        assert_eq!(controller.active_index(), Some(2));
    }

    #[test]
    fn next_n_times_returns_to_start() {
        for count in 1..=7 {
            for start in 0..count {
                let mut controller = Controller::new(count);
                controller.jump(start);
                for _ in 0..count {
                    controller.next();
                }
                assert_eq!(controller.active_index(), Some(start));
            }
        }
    }

    #[test]
    fn previous_and_next_are_inverse() {
        let mut controller = Controller::new(5);
        for start in 0..5 {
            controller.jump(start);
            controller.next();
            controller.previous();
            assert_eq!(controller.active_index(), Some(start));
            controller.previous();
            controller.next();
            assert_eq!(controller.active_index(), Some(start));
        }
    }

    #[test]
    fn single_item_next_reports_self_change() {
        let mut controller = Controller::new(1);
        let change = controller.next().expect("single item still advances");
        assert_eq!((change.from, change.to), (0, 0));
    }

    #[test]
    fn jump_sets_exact_index() {
        let mut controller = Controller::new(4);
        let change = controller.jump(3).expect("valid jump");
        assert_eq!(change.cause, ChangeCause::Jump);
        assert_eq!(controller.active_index(), Some(3));
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut controller = Controller::new(3);
        controller.jump(1);
        assert_eq!(controller.jump(3), None);
        assert_eq!(controller.jump(usize::MAX), None);
        assert_eq!(controller.active_index(), Some(1));
    }

    #[test]
    fn jump_to_current_is_not_a_change() {
        let mut controller = Controller::new(3);
        assert_eq!(controller.jump(0), None);
    }

    #[test]
    fn empty_sequence_is_inert() {
        let mut controller = Controller::new(0);
        assert_eq!(controller.next(), None);
        assert_eq!(controller.previous(), None);
        assert_eq!(controller.jump(0), None);
        assert_eq!(controller.active_index(), None);
        assert!(controller.is_empty());
    }
}

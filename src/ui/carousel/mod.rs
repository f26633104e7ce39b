// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel.
//!
//! The component composes five parts that all derive from a single active
//! index:
//!
//! - [`controller`] owns the index and the `next`/`previous`/`jump` operations
//! - [`autoplay`] decides when a timer tick should advance
//! - [`swipe`] turns pointer drags into `next`/`previous`
//! - [`animator`] retargets card visuals whenever the index changes
//! - [`indicator`] derives the progress bar and markers from the index
//!
//! Every input, whether a click, a key, a drag or a timer tick, enters
//! through [`State::handle`], which is the only place the index is mutated.

pub mod animator;
pub mod autoplay;
pub mod controller;
pub mod indicator;
pub mod swipe;
pub mod view;

pub use animator::{Animator, CardRole, CardVisual};
pub use autoplay::{Autoplay, AutoplayInterval};
pub use controller::{ChangeCause, Controller, IndexChange};
pub use swipe::{SwipeDirection, SwipeGesture, SwipeThreshold};
pub use view::view;

use crate::config::Config;
use crate::ui::motion::Motion;
use iced::Point;
use std::time::Instant;

/// Messages handled by the carousel.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    Jump(usize),
    /// Timer poll, also used to settle finished animations.
    Tick,
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    PointerLeft,
}

/// Result of handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Advanced(IndexChange),
}

/// Carousel behavior settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub autoplay: bool,
    pub interval: AutoplayInterval,
    pub swipe_threshold: SwipeThreshold,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval: AutoplayInterval::default(),
            swipe_threshold: SwipeThreshold::default(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            autoplay: config.carousel.autoplay.unwrap_or(defaults.autoplay),
            interval: config
                .carousel
                .autoplay_interval_ms
                .map_or(defaults.interval, AutoplayInterval::new),
            swipe_threshold: config
                .carousel
                .swipe_threshold
                .map_or(defaults.swipe_threshold, SwipeThreshold::new),
        }
    }
}

/// Carousel component state.
#[derive(Debug, Clone)]
pub struct State {
    controller: Controller,
    autoplay: Autoplay,
    swipe: SwipeGesture,
    animator: Animator,
    pointer_x: Option<f32>,
}

impl State {
    /// Creates the carousel over `count` testimonials. Autoplay starts on [`State::mount`].
    #[must_use]
    pub fn new(count: usize, settings: Settings) -> Self {
        let controller = Controller::new(count);
        let animator = Animator::new(count, controller.active_index());
        Self {
            controller,
            autoplay: Autoplay::new(settings.interval, settings.autoplay),
            swipe: SwipeGesture::new(settings.swipe_threshold),
            animator,
            pointer_x: None,
        }
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.controller.active_index()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.controller.count()
    }

    #[must_use]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.autoplay.is_mounted()
    }

    /// Starts the autoplay timer.
    pub fn mount(&mut self, now: Instant) {
        tracing::debug!(count = self.count(), "carousel mounted");
        self.autoplay.mount(now);
    }

    /// Cancels the autoplay timer and any gesture in progress.
    pub fn unmount(&mut self) {
        tracing::debug!("carousel unmounted");
        self.autoplay.unmount();
        self.swipe.cancel();
        self.pointer_x = None;
    }

    /// True while autoplay may advance on the next poll.
    #[must_use]
    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running() && !self.controller.is_empty()
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animator.is_animating(now)
    }

    pub fn handle(&mut self, message: Message, now: Instant, motion: &Motion) -> Effect {
        match message {
            Message::Next => {
                self.autoplay.reset(now);
                let change = self.controller.next();
                self.apply(change, now, motion)
            }
            Message::Previous => {
                self.autoplay.reset(now);
                let change = self.controller.previous();
                self.apply(change, now, motion)
            }
            Message::Jump(index) => {
                self.autoplay.reset(now);
                let change = self.controller.jump(index);
                if change.is_none() {
                    tracing::debug!(index, count = self.count(), "jump ignored");
                }
                self.apply(change, now, motion)
            }
            Message::Tick => {
                self.animator.settle(now);
                if self.autoplay.tick(now) {
                    let change = self.controller.next();
                    self.apply(change, now, motion)
                } else {
                    Effect::None
                }
            }
            Message::PointerMoved(position) => {
                self.pointer_x = Some(position.x);
                self.swipe.update(position.x);
                Effect::None
            }
            Message::PointerPressed => {
                if let Some(x) = self.pointer_x {
                    self.swipe.begin(x);
                }
                Effect::None
            }
            Message::PointerReleased => match self.swipe.end() {
                Some(SwipeDirection::Left) => self.handle(Message::Next, now, motion),
                Some(SwipeDirection::Right) => self.handle(Message::Previous, now, motion),
                None => Effect::None,
            },
            Message::PointerLeft => {
                self.swipe.cancel();
                self.pointer_x = None;
                Effect::None
            }
        }
    }

    fn apply(&mut self, change: Option<IndexChange>, now: Instant, motion: &Motion) -> Effect {
        match change {
            Some(change) => {
                tracing::debug!(from = change.from, to = change.to, cause = ?change.cause, "carousel advanced");
                self.animator.on_change(change, now, motion);
                Effect::Advanced(change)
            }
            None => Effect::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn mounted(count: usize) -> (State, Instant) {
        let now = Instant::now();
        let mut state = State::new(count, Settings::default());
        state.mount(now);
        (state, now)
    }

    fn drag(state: &mut State, from: f32, to: f32, now: Instant) -> Effect {
        let motion = Motion::default();
        state.handle(Message::PointerMoved(Point::new(from, 10.0)), now, &motion);
        state.handle(Message::PointerPressed, now, &motion);
        state.handle(Message::PointerMoved(Point::new(to, 10.0)), now, &motion);
        state.handle(Message::PointerReleased, now, &motion)
    }

    #[test]
    fn next_twice_then_wraps() {
        let (mut state, now) = mounted(3);
        let motion = Motion::default();
        state.handle(Message::Next, now, &motion);
        state.handle(Message::Next, now, &motion);
        assert_eq!(state.active_index(), Some(2));
        state.handle(Message::Next, now, &motion);
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn short_drag_changes_nothing() {
        let (mut state, now) = mounted(3);
        assert_eq!(drag(&mut state, 300.0, 260.0, now), Effect::None);
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn long_drags_move_exactly_once() {
        let (mut state, now) = mounted(3);
        let effect = drag(&mut state, 300.0, 100.0, now);
        assert!(matches!(effect, Effect::Advanced(IndexChange { cause: ChangeCause::Next, .. })));
        assert_eq!(state.active_index(), Some(1));

        drag(&mut state, 100.0, 300.0, now);
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn pointer_leaving_cancels_drag() {
        let (mut state, now) = mounted(3);
        let motion = Motion::default();
        state.handle(Message::PointerMoved(Point::new(300.0, 0.0)), now, &motion);
        state.handle(Message::PointerPressed, now, &motion);
        state.handle(Message::PointerMoved(Point::new(0.0, 0.0)), now, &motion);
        state.handle(Message::PointerLeft, now, &motion);
        assert_eq!(state.handle(Message::PointerReleased, now, &motion), Effect::None);
    }

    #[test]
    fn manual_navigation_postpones_autoplay() {
        let (mut state, start) = mounted(3);
        let motion = Motion::default();

        state.handle(Message::Next, start + Duration::from_secs(6), &motion);
        state.handle(Message::Tick, start + Duration::from_secs(8), &motion);
        assert_eq!(state.active_index(), Some(1));

        state.handle(Message::Tick, start + Duration::from_secs(14), &motion);
        assert_eq!(state.active_index(), Some(2));
    }

    #[test]
    fn ignored_jump_still_resets_autoplay() {
        let (mut state, start) = mounted(3);
        let motion = Motion::default();

        assert_eq!(
            state.handle(Message::Jump(9), start + Duration::from_secs(7), &motion),
            Effect::None
        );
        state.handle(Message::Tick, start + Duration::from_secs(8), &motion);
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn ticks_after_unmount_never_advance() {
        let (mut state, start) = mounted(3);
        let motion = Motion::default();
        state.unmount();
        for secs in (8..=80).step_by(8) {
            state.handle(Message::Tick, start + Duration::from_secs(secs), &motion);
        }
        assert_eq!(state.active_index(), Some(0));
        assert!(!state.autoplay_running());
    }

    #[test]
    fn empty_carousel_is_inert() {
        let (mut state, now) = mounted(0);
        let motion = Motion::default();
        for message in [Message::Next, Message::Previous, Message::Jump(0)] {
            assert_eq!(state.handle(message, now, &motion), Effect::None);
        }
        assert_eq!(
            state.handle(Message::Tick, now + Duration::from_secs(60), &motion),
            Effect::None
        );
        assert_eq!(state.active_index(), None);
        assert!(!state.autoplay_running());
    }

    #[test]
    fn settings_follow_config() {
        let mut config = Config::default();
        config.carousel.autoplay = Some(false);
        config.carousel.autoplay_interval_ms = Some(10);
        config.carousel.swipe_threshold = Some(120.0);

        let settings = Settings::from_config(&config);
        assert!(!settings.autoplay);
        assert_eq!(settings.interval, AutoplayInterval::new(1000));
        assert_eq!(settings.swipe_threshold.value(), 120.0);
    }

    #[test]
    fn advance_starts_card_animation() {
        let (mut state, now) = mounted(3);
        state.handle(Message::Next, now, &Motion::default());
        assert!(state.is_animating(now));
        assert_eq!(state.animator().animating_index(), Some(1));
    }
}

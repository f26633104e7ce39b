// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Timers only exist while something needs them: the loader steps while the
//! splash is shown, frames run while an animation is in flight, and the
//! carousel polls its autoplay timer while mounted. Dropping a subscription
//! is what releases its timer.

use super::{Message, Screen};
use crate::config::{ANIMATION_FRAME_PERIOD, AUTOPLAY_POLL_PERIOD, LOADER_STEP_PERIOD};
use crate::ui::carousel;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};

/// Routes native events for the current screen.
///
/// Window close requests and size changes are handled on every screen.
/// Arrow keys drive the carousel once the portfolio is shown, unless a
/// widget (such as a text input) already captured them.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Loading => {
            event::listen_with(|event, _status, window_id| window_message(&event, window_id))
        }
        Screen::Portfolio => event::listen_with(|event, status, window_id| {
            if let Some(message) = window_message(&event, window_id) {
                return Some(message);
            }

            if matches!(status, event::Status::Captured) {
                return None;
            }

            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                    arrow_message(&key)
                }
                _ => None,
            }
        }),
    }
}

fn window_message(event: &event::Event, window_id: iced::window::Id) -> Option<Message> {
    match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(
            iced::window::Event::Opened { size, .. } | iced::window::Event::Resized(size),
        ) => Some(Message::WindowResized(*size)),
        _ => None,
    }
}

fn arrow_message(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::ArrowLeft) => {
            Some(Message::Carousel(carousel::Message::Previous))
        }
        keyboard::Key::Named(key::Named::ArrowRight) => {
            Some(Message::Carousel(carousel::Message::Next))
        }
        _ => None,
    }
}

/// Creates the loader subscriptions: progress steps plus spinner frames.
pub fn create_loader_subscription(screen: Screen) -> Subscription<Message> {
    if screen == Screen::Loading {
        Subscription::batch([
            time::every(LOADER_STEP_PERIOD).map(|_| Message::LoaderStep),
            time::every(ANIMATION_FRAME_PERIOD).map(Message::Tick),
        ])
    } else {
        Subscription::none()
    }
}

/// Creates the portfolio tick: frame rate while animating, slow polling
/// while only the autoplay timer is running, nothing otherwise.
pub fn create_tick_subscription(animating: bool, autoplay_running: bool) -> Subscription<Message> {
    match tick_period(animating, autoplay_running) {
        Some(period) => time::every(period).map(Message::Tick),
        None => Subscription::none(),
    }
}

fn tick_period(animating: bool, autoplay_running: bool) -> Option<std::time::Duration> {
    if animating {
        Some(ANIMATION_FRAME_PERIOD)
    } else if autoplay_running {
        Some(AUTOPLAY_POLL_PERIOD)
    } else {
        None
    }
}

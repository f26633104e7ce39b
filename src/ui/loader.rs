// SPDX-License-Identifier: MPL-2.0
//! Startup splash: spinner, owner name and a stepped progress bar.

use crate::config::LOADER_STEP_PERCENT;
use crate::content::Profile;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container, Space};
use iced::{Element, Length};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    started: Instant,
    percent: u8,
}

impl State {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            percent: 0,
        }
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Advances the bar by one step, saturating at 100.
    pub fn step(&mut self) {
        self.percent = self.percent.saturating_add(LOADER_STEP_PERCENT).min(100);
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }
}

pub fn view<'a, M: 'a>(
    state: &State,
    profile: &'a Profile,
    i18n: &I18n,
    colors: ColorScheme,
    now: Instant,
) -> Element<'a, M> {
    let spinner =
        AnimatedSpinner::new(colors.brand, now.saturating_duration_since(state.started))
            .into_element();

    let ratio = f32::from(state.percent) / 100.0;
    let fill = Container::new(
        Space::new()
            .width(Length::Fixed(sizing::LOADER_BAR_WIDTH * ratio))
            .height(Length::Fixed(sizing::LOADER_BAR_HEIGHT)),
    )
    .style(styles::container::pill(colors.brand));
    let bar = Container::new(fill)
        .width(Length::Fixed(sizing::LOADER_BAR_WIDTH))
        .height(Length::Fixed(sizing::LOADER_BAR_HEIGHT))
        .style(styles::container::pill(colors.brand_muted));

    let percent = state.percent.to_string();
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(spinner)
        .push(
            text(profile.name.as_str())
                .size(typography::TITLE_MD)
                .color(colors.text_primary),
        )
        .push(
            text(profile.headline.as_str())
                .size(typography::BODY)
                .color(colors.text_secondary),
        )
        .push(bar)
        .push(
            text(i18n.tr_with_args("loader-progress", &[("percent", percent.as_str())]))
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );

    Container::new(content)
        .center(Length::Fill)
        .style(styles::container::page(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LOADER_DURATION, LOADER_STEP_PERIOD};

    #[test]
    fn steps_fill_the_bar_by_the_end_of_the_splash() {
        let mut state = State::new(Instant::now());
        let steps = LOADER_DURATION.as_millis() / LOADER_STEP_PERIOD.as_millis();
        for _ in 0..steps {
            state.step();
        }
        assert!(state.is_complete());
        assert_eq!(state.percent(), 100);
    }

    #[test]
    fn step_saturates() {
        let mut state = State::new(Instant::now());
        for _ in 0..50 {
            state.step();
        }
        assert_eq!(state.percent(), 100);
    }

    #[test]
    fn view_borrows_profile_for_any_message_type() {
        let profile = Profile {
            name: "Ada".to_string(),
            headline: "Engineer".to_string(),
            intro: String::new(),
        };
        let i18n = I18n::new(Some("en-US".into()), None, &crate::config::Config::default());
        let now = Instant::now();
        let state = State::new(now);

        let _: Element<'_, &str> = view(&state, &profile, &i18n, ColorScheme::dark(), now);
    }

    #[test]
    fn first_step_adds_five_percent() {
        let mut state = State::new(Instant::now());
        state.step();
        assert_eq!(state.percent(), 5);
        assert!(!state.is_complete());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button (hero call to action, form submit).
pub fn primary(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, glow) = match status {
            button::Status::Hovered => (colors.brand_muted_mix(0.15), 0.6),
            button::Status::Pressed => (colors.brand_muted_mix(0.3), 0.3),
            button::Status::Disabled => (colors.brand_muted, 0.0),
            button::Status::Active => (colors.brand, 0.3),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::scaled(shadow::BRAND_GLOW, glow),
            snap: true,
        }
    }
}

/// Brand-outlined button (secondary actions, carousel arrows).
pub fn outline(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match status {
            button::Status::Hovered => 0.15,
            button::Status::Pressed => 0.3,
            _ => 0.0,
        };
        button::Style {
            background: Some(Background::Color(Color {
                a: fill,
                ..colors.brand
            })),
            text_color: colors.text_primary,
            border: Border {
                color: colors.brand,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Text-only navbar link; the active link is drawn in the primary text color.
pub fn nav_link(
    colors: ColorScheme,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active || matches!(status, button::Status::Hovered) {
            colors.text_primary
        } else {
            colors.text_secondary
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round progress marker of the carousel.
pub fn marker(colors: ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if active {
            colors.brand
        } else if matches!(status, button::Status::Hovered) {
            colors.brand_muted_mix(0.5)
        } else {
            colors.brand_muted
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

impl ColorScheme {
    /// Brand color blended towards the muted brand by `t`.
    #[must_use]
    pub fn brand_muted_mix(&self, t: f32) -> Color {
        use crate::ui::motion::Interpolate;
        self.brand.interpolate(&self.brand_muted, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let colors = ColorScheme::dark();
        let style = primary(colors)(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, colors.brand);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn active_nav_link_is_highlighted() {
        let colors = ColorScheme::dark();
        let active = nav_link(colors, true)(&Theme::Dark, button::Status::Active);
        let idle = nav_link(colors, false)(&Theme::Dark, button::Status::Active);
        assert_eq!(active.text_color, colors.text_primary);
        assert_eq!(idle.text_color, colors.text_secondary);
    }

    #[test]
    fn active_marker_differs_from_idle_marker() {
        let colors = ColorScheme::dark();
        let on = marker(colors, true)(&Theme::Dark, button::Status::Active);
        let off = marker(colors, false)(&Theme::Dark, button::Status::Active);
        assert_ne!(on.background, off.background);
    }
}

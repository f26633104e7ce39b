// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system theme modes.

use crate::ui::design_tokens::{opacity, palette};
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_page: Color,
    pub surface_card: Color,
    pub surface_input: Color,
    pub surface_navbar: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand: Color,
    pub brand_muted: Color,

    pub error: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::WHITE,
            surface_card: palette::GRAY_100,
            surface_input: palette::WHITE_100,
            surface_navbar: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },

            text_primary: palette::NAVY_900,
            text_secondary: palette::GRAY_700,

            brand: palette::BRAND_700,
            brand_muted: palette::BRAND_300,

            error: palette::ERROR_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::NAVY_950,
            surface_card: palette::NAVY_700,
            surface_input: palette::NAVY_600,
            surface_navbar: Color {
                a: opacity::SURFACE,
                ..palette::NAVY_950
            },

            text_primary: palette::WHITE,
            text_secondary: palette::LAVENDER_300,

            brand: palette::BRAND_500,
            brand_muted: palette::BRAND_MUTED,

            error: palette::ERROR_500,
        }
    }

    /// Builds the iced theme carrying this scheme's base colors.
    #[must_use]
    pub fn to_theme(&self, name: &str) -> Theme {
        let mut base = if self.surface_page.r > 0.5 {
            Palette::LIGHT
        } else {
            Palette::DARK
        };
        base.background = self.surface_page;
        base.text = self.text_primary;
        base.primary = self.brand;
        base.success = palette::SUCCESS_500;
        base.danger = self.error;

        Theme::custom(name.to_string(), base)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Mode selected by the navbar toggle: always an explicit light or dark.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_page.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_page.r < 0.1);
    }

    #[test]
    fn both_themes_use_violet_brand() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.brand.b > scheme.brand.g);
            assert!(scheme.brand.r > scheme.brand.g);
        }
    }

    #[test]
    fn toggle_flips_explicit_modes() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_ne!(ThemeMode::System.toggled(), ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
    }
}

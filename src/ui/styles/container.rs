// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Navbar strip; transparent until the page is scrolled.
pub fn navbar(colors: ColorScheme, scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: scrolled.then_some(Background::Color(colors.surface_navbar)),
        shadow: if scrolled { shadow::CARD } else { shadow::NONE },
        ..Default::default()
    }
}

/// Animated card surface.
///
/// `glow` and `highlight` range from 0 to 1 and come straight from the
/// hover and carousel animations; `opacity` fades the whole surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLook {
    pub glow: f32,
    pub highlight: f32,
    pub opacity: f32,
}

impl CardLook {
    pub const RESTING: Self = Self {
        glow: 0.0,
        highlight: 0.0,
        opacity: 1.0,
    };
}

pub fn card(colors: ColorScheme, look: CardLook) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let border_color = Color {
            a: look.opacity,
            ..colors.brand_muted.interpolate_to(colors.brand, look.highlight)
        };
        let mut surface_shadow = shadow::scaled(shadow::BRAND_GLOW, look.glow);
        surface_shadow.color.a *= look.opacity;

        container::Style {
            background: Some(Background::Color(Color {
                a: look.opacity,
                ..colors.surface_card
            })),
            text_color: Some(Color {
                a: look.opacity,
                ..colors.text_primary
            }),
            border: Border {
                color: border_color,
                width: border::WIDTH_SM + look.highlight,
                radius: radius::LG.into(),
            },
            shadow: surface_shadow,
            ..Default::default()
        }
    }
}

/// Pill used for avatars, tags and the loader track.
pub fn pill(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

trait InterpolateTo {
    fn interpolate_to(self, other: Color, t: f32) -> Color;
}

impl InterpolateTo for Color {
    fn interpolate_to(self, other: Color, t: f32) -> Color {
        use crate::ui::motion::Interpolate;
        self.interpolate(&other, t.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlighted_card_uses_brand_border() {
        let colors = ColorScheme::dark();
        let look = CardLook {
            glow: 1.0,
            highlight: 1.0,
            opacity: 1.0,
        };
        let style = card(colors, look)(&Theme::Dark);
        assert_eq!(style.border.color, colors.brand);
        assert!(style.shadow.blur_radius > 0.0);
    }

    #[test]
    fn resting_card_has_no_glow() {
        let style = card(ColorScheme::dark(), CardLook::RESTING)(&Theme::Dark);
        assert_eq!(style.shadow.color.a, 0.0);
    }

    #[test]
    fn navbar_is_transparent_until_scrolled() {
        let colors = ColorScheme::dark();
        assert!(navbar(colors, false)(&Theme::Dark).background.is_none());
        assert!(navbar(colors, true)(&Theme::Dark).background.is_some());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Contact form field styles.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Form field; invalid fields get an error-colored border.
pub fn field(
    colors: ColorScheme,
    invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_theme: &Theme, status: text_input::Status| {
        let border_color = if invalid {
            colors.error
        } else if matches!(status, text_input::Status::Focused { .. }) {
            colors.brand
        } else {
            Color::TRANSPARENT
        };
        text_input::Style {
            background: Background::Color(colors.surface_input),
            border: Border {
                color: border_color,
                width: if invalid { border::WIDTH_MD } else { border::WIDTH_SM },
                radius: radius::SM.into(),
            },
            icon: colors.text_secondary,
            placeholder: colors.text_secondary,
            value: colors.text_primary,
            selection: Color {
                a: 0.4,
                ..colors.brand
            },
        }
    }
}

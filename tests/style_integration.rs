// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_folio::ui::design_tokens::{palette, sizing, spacing};
    use iced_folio::ui::styles::{button, container, text_input};
    use iced_folio::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_styles_are_callable_for_both_schemes() {
        for colors in [ColorScheme::dark(), ColorScheme::light()] {
            let theme = Theme::Dark;
            let _ = button::primary(colors)(&theme, iced::widget::button::Status::Active);
            let _ = button::outline(colors)(&theme, iced::widget::button::Status::Hovered);
            let _ = button::nav_link(colors, true)(&theme, iced::widget::button::Status::Active);
            let _ = button::marker(colors, false)(&theme, iced::widget::button::Status::Pressed);
            let _ = container::page(colors)(&theme);
            let _ = container::card(colors, container::CardLook::RESTING)(&theme);
            let _ = text_input::field(colors, true)(
                &theme,
                iced::widget::text_input::Status::Active,
            );
        }
    }

    #[test]
    fn active_marker_is_brand_colored() {
        let colors = ColorScheme::dark();
        let style = button::marker(colors, true)(&Theme::Dark, iced::widget::button::Status::Active);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(colors.brand))
        );
    }

    #[test]
    fn brand_matches_palette() {
        assert_eq!(ColorScheme::dark().brand, palette::BRAND_500);
    }

    #[test]
    fn cards_fit_the_content_width() {
        let carousel_row = sizing::TESTIMONIAL_CARD_WIDTH * 1.05
            + 2.0 * sizing::TESTIMONIAL_SIDE_WIDTH
            + 2.0 * spacing::LG;
        assert!(carousel_row <= sizing::CONTENT_MAX_WIDTH);
    }

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}

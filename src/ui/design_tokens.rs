// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by every section of the portfolio.

## Organization

- **Palette**: Base colors (deep navy surfaces, violet brand)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// A translucent brand tint
let glow = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::BRAND_500
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const WHITE_100: Color = Color::from_rgb(0.953, 0.953, 0.953); // #f3f3f3
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.93, 0.95);

    // Surfaces (navy scale)
    pub const NAVY_950: Color = Color::from_rgb(0.020, 0.031, 0.086); // #050816 page
    pub const NAVY_900: Color = Color::from_rgb(0.035, 0.012, 0.145); // #090325
    pub const NAVY_800: Color = Color::from_rgb(0.063, 0.051, 0.145); // #100d25
    pub const NAVY_700: Color = Color::from_rgb(0.082, 0.067, 0.169); // #15112b cards
    pub const NAVY_600: Color = Color::from_rgb(0.082, 0.063, 0.188); // #151030 inputs

    // Text on dark surfaces
    pub const LAVENDER_300: Color = Color::from_rgb(0.667, 0.651, 0.765); // #aaa6c3

    // Brand colors (violet scale)
    pub const BRAND_300: Color = Color::from_rgb(0.733, 0.604, 1.0);
    pub const BRAND_500: Color = Color::from_rgb(0.569, 0.369, 1.0); // #915EFF
    pub const BRAND_700: Color = Color::from_rgb(0.43, 0.25, 0.85);
    pub const BRAND_MUTED: Color = Color::from_rgb(0.176, 0.153, 0.345); // #2d2758 markers

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // #ef4444
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar background once the page is scrolled.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 72.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

    // Cards
    pub const SERVICE_CARD_WIDTH: f32 = 250.0;
    pub const PROJECT_CARD_WIDTH: f32 = 340.0;
    pub const SKILL_CARD_WIDTH: f32 = 320.0;
    pub const TESTIMONIAL_CARD_WIDTH: f32 = 420.0;
    pub const TESTIMONIAL_SIDE_WIDTH: f32 = 260.0;
    pub const AVATAR: f32 = 48.0;

    // Carousel controls
    pub const CAROUSEL_BUTTON: f32 = 44.0;
    pub const PROGRESS_TRACK: f32 = 4.0;
    pub const MARKER: f32 = 10.0;

    // Loader
    pub const LOADER_SPINNER: f32 = 96.0;
    pub const LOADER_BAR_WIDTH: f32 = 256.0;
    pub const LOADER_BAR_HEIGHT: f32 = 8.0;

    pub const INPUT_HEIGHT: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero heading
    pub const HERO: f32 = 56.0;

    /// Section heading ("Projects.")
    pub const TITLE_LG: f32 = 44.0;

    /// Card titles
    pub const TITLE_MD: f32 = 22.0;

    /// Sub-headings, logo
    pub const TITLE_SM: f32 = 18.0;

    /// Section kicker ("MY WORK")
    pub const KICKER: f32 = 16.0;

    /// Standard body
    pub const BODY: f32 = 15.0;

    /// Tags, captions
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const CARD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };

    /// Brand glow at full strength; scaled by hover and carousel animations.
    pub const BRAND_GLOW: Shadow = Shadow {
        color: palette::BRAND_500,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 32.0,
    };

    /// Returns `base` with its color alpha multiplied by `strength`.
    #[must_use]
    pub fn scaled(base: Shadow, strength: f32) -> Shadow {
        let strength = strength.clamp(0.0, 1.0);
        Shadow {
            color: Color {
                a: base.color.a * strength,
                ..base.color
            },
            blur_radius: base.blur_radius * strength,
            ..base
        }
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::HERO > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Carousel cards: the active card is the widest
    assert!(sizing::TESTIMONIAL_CARD_WIDTH > sizing::TESTIMONIAL_SIDE_WIDTH);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

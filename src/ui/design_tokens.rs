// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by every view, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (slate neutrals, indigo brand, red errors)
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use cs_job_finder::ui::design_tokens::{palette, spacing};
use iced::Color;

let muted = Color { a: 0.5, ..palette::SLATE_500 };
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutrals (slate)
    pub const SLATE_50: Color = Color::from_rgb(0.973, 0.980, 0.988);
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976);
    pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941);
    pub const SLATE_300: Color = Color::from_rgb(0.796, 0.835, 0.882);
    pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545);
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);

    // Brand (indigo)
    pub const INDIGO_50: Color = Color::from_rgb(0.933, 0.949, 1.0);
    pub const INDIGO_200: Color = Color::from_rgb(0.780, 0.824, 0.996);
    pub const INDIGO_400: Color = Color::from_rgb(0.506, 0.549, 0.973);
    pub const INDIGO_600: Color = Color::from_rgb(0.310, 0.275, 0.898);
    pub const INDIGO_700: Color = Color::from_rgb(0.263, 0.220, 0.792);

    // Semantic colors
    pub const RED_50: Color = Color::from_rgb(0.996, 0.949, 0.949);
    pub const RED_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_XL: f32 = 48.0;
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const CONTENT_MAX_WIDTH: f32 = 896.0;
    pub const CARD_MAX_WIDTH: f32 = 672.0;
    pub const LOADING_CARD_HEIGHT: f32 = 320.0;
    pub const MAP_HEIGHT: f32 = 500.0;
    pub const PRIMARY_ACTION_MAX_WIDTH: f32 = 448.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const HERO: f32 = 36.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const BRAND: Shadow = Shadow {
        color: Color::from_rgba(0.310, 0.275, 0.898, 0.3),
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(typography::HERO > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::CARD_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);
    assert!(sizing::PRIMARY_ACTION_MAX_WIDTH < sizing::CARD_MAX_WIDTH);
};

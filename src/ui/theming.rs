// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the views pick from, resolved once per theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_subtle: Color,

    pub error: Color,
    pub error_subtle: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::SLATE_50,
            text_primary: palette::SLATE_900,
            text_secondary: palette::SLATE_500,
            brand_primary: palette::INDIGO_600,
            brand_subtle: palette::INDIGO_50,
            error: palette::RED_500,
            error_subtle: palette::RED_50,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::SLATE_800,
            surface_secondary: palette::SLATE_900,
            text_primary: palette::WHITE,
            text_secondary: palette::SLATE_300,
            brand_primary: palette::INDIGO_400,
            brand_subtle: Color {
                a: 0.2,
                ..palette::INDIGO_400
            },
            error: palette::RED_400,
            error_subtle: Color {
                a: 0.15,
                ..palette::RED_400
            },
        }
    }

    #[must_use]
    pub fn for_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
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

    /// Next mode in the navbar toggle cycle: Light → Dark → System → Light.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// i18n key naming this mode.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }

    /// The Iced theme to render with.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.3);
    }

    #[test]
    fn brand_color_is_indigo_in_both_schemes() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.brand_primary.b > scheme.brand_primary.g);
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn toggle_cycles_through_all_modes() {
        let start = ThemeMode::Light;
        assert_eq!(start.next(), ThemeMode::Dark);
        assert_eq!(start.next().next(), ThemeMode::System);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.to_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_theme(), Theme::Dark);
    }
}

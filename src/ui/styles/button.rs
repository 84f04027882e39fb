// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled indigo pill used for the main call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::INDIGO_700,
        button::Status::Active => palette::INDIGO_600,
        button::Status::Disabled => palette::INDIGO_200,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::BRAND,
        ..button::Style::default()
    }
}

/// Wide rounded-rectangle variant of [`primary`] for full-width actions.
pub fn primary_block(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..primary(theme, status)
    }
}

/// Small bordered button floating over the map.
pub fn floating(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = if is_light {
        (palette::WHITE, palette::SLATE_800)
    } else {
        (palette::SLATE_800, palette::WHITE)
    };
    let background = match status {
        button::Status::Hovered | button::Status::Pressed if is_light => palette::SLATE_50,
        button::Status::Hovered | button::Status::Pressed => palette::SLATE_900,
        _ => background,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette::SLATE_200,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        ..button::Style::default()
    }
}

/// Text-only button that looks like a hyperlink.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let base = if matches!(theme, Theme::Light) {
        palette::INDIGO_600
    } else {
        palette::INDIGO_400
    };
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::INDIGO_700,
        _ => base,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Borderless navbar button.
pub fn nav(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.weak.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

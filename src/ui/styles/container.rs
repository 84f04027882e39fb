// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// White (or slate, in dark mode) rounded card with a hairline border.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let (background, border_color) = if extended.is_dark {
        (palette::SLATE_800, Color::from_rgba(1.0, 1.0, 1.0, 0.08))
    } else {
        (palette::WHITE, palette::SLATE_200)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let background = if extended.is_dark {
        palette::SLATE_900
    } else {
        palette::WHITE
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: if extended.is_dark {
                palette::SLATE_800
            } else {
                palette::SLATE_200
            },
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let background = if theme.extended_palette().is_dark {
        palette::SLATE_900
    } else {
        palette::SLATE_50
    };

    container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Inline error message pill.
pub fn error_banner(theme: &Theme) -> container::Style {
    let (background, text) = if theme.extended_palette().is_dark {
        (
            Color {
                a: 0.15,
                ..palette::RED_400
            },
            palette::RED_400,
        )
    } else {
        (palette::RED_50, palette::RED_500)
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Round badge behind the idle-state icon.
pub fn icon_badge(theme: &Theme) -> container::Style {
    let (background, text) = if theme.extended_palette().is_dark {
        (
            Color {
                a: 0.2,
                ..palette::INDIGO_400
            },
            palette::INDIGO_400,
        )
    } else {
        (palette::INDIGO_50, palette::INDIGO_600)
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

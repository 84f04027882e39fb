// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use crate::config;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// i18n key of the notice shown when settings cannot be written.
pub const CONFIG_SAVE_WARNING_KEY: &str = "notification-config-save-error";

/// Persists the selected theme mode, keeping every other setting as loaded
/// from disk.
///
/// Returns the i18n key of a warning when saving failed. Guarded during tests
/// so unit tests never touch the user's config directory.
pub fn persist_theme_mode(theme_mode: ThemeMode) -> Option<String> {
    if cfg!(test) {
        return None;
    }
    persist_theme_mode_with_override(theme_mode, None)
}

/// Persists the theme mode into the settings file under `base_dir`.
///
/// An existing file that cannot be parsed is left untouched: rewriting it
/// from defaults would drop every other section.
pub fn persist_theme_mode_with_override(
    theme_mode: ThemeMode,
    base_dir: Option<PathBuf>,
) -> Option<String> {
    let (mut cfg, load_warning) = config::load_with_override(base_dir.clone());
    if load_warning.is_some() {
        tracing::warn!(?theme_mode, "settings file unreadable; theme mode not saved");
        return Some(CONFIG_SAVE_WARNING_KEY.to_string());
    }
    cfg.general.theme_mode = theme_mode;

    match config::save_with_override(&cfg, base_dir) {
        Ok(()) => {
            tracing::debug!(?theme_mode, "theme mode saved");
            None
        }
        Err(error) => {
            tracing::warn!(%error, "failed to save config");
            Some(CONFIG_SAVE_WARNING_KEY.to_string())
        }
    }
}

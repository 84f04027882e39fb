// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[location]` - Which location provider to use and whether access is allowed
//! - `[map]` - Tile server behind the map surface
//!
//! ```toml
//! [general]
//! language = "fr"
//! theme_mode = "dark"
//!
//! [location]
//! provider = "fixed"
//! latitude = 40.7128
//! longitude = -74.006
//!
//! [map]
//! enabled = true
//! tile_endpoint = "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
//! ```
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `CS_JOB_FINDER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use cs_job_finder::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::geo::{InvalidPosition, Position};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Enums
// =============================================================================

/// Source of the user's position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Approximate position from the public IP address.
    #[default]
    IpLookup,
    /// Position taken from `latitude`/`longitude`.
    Fixed,
    /// No location capability.
    None,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Location settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    /// Which provider answers location requests.
    #[serde(default)]
    pub provider: ProviderKind,

    /// Whether location access is allowed. `false` makes every request
    /// fail with "permission denied".
    #[serde(default = "default_allow", skip_serializing_if = "Option::is_none")]
    pub allow: Option<bool>,

    /// Latitude for the fixed provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude for the fixed provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Endpoint for the IP lookup provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Start an acquisition when the window opens.
    #[serde(
        default = "default_auto_locate",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_locate: Option<bool>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            allow: default_allow(),
            latitude: None,
            longitude: None,
            endpoint: None,
            auto_locate: default_auto_locate(),
        }
    }
}

impl LocationConfig {
    /// Returns the configured fixed position, if both coordinates are set.
    #[must_use]
    pub fn fixed_position(&self) -> Option<std::result::Result<Position, InvalidPosition>> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Position::validated(latitude, longitude)),
            _ => None,
        }
    }
}

/// Map surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    /// Draw map tiles behind the pin. `false` keeps the plain grid and makes
    /// no tile requests.
    #[serde(default = "default_map_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Slippy-map URL template with `{z}`, `{x}` and `{y}` placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_endpoint: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            enabled: default_map_enabled(),
            tile_endpoint: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Location settings.
    #[serde(default)]
    pub location: LocationConfig,

    /// Map surface settings.
    #[serde(default)]
    pub map: MapConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_allow() -> Option<bool> {
    Some(true)
}

fn default_auto_locate() -> Option<bool> {
    Some(DEFAULT_AUTO_LOCATE)
}

fn default_map_enabled() -> Option<bool> {
    Some(DEFAULT_MAP_ENABLED)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

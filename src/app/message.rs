// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::geo::Position;
use crate::ui::locator;
use crate::ui::navbar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Locator(locator::Message),
    Navbar(navbar::Message),
    /// Close the notice shown under the navbar.
    DismissNotice,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CS_JOB_FINDER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Report this position instead of asking any provider.
    pub fixed_position: Option<Position>,
    /// Start without any location capability.
    pub no_geolocation: bool,
    /// Start an acquisition as soon as the window opens.
    pub auto_locate: bool,
    /// Never fetch map tiles.
    pub no_map: bool,
}

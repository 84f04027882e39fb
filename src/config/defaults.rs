// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Acquisition**: Location request options
//! - **Map**: Tile raster behind the located position
//! - **Window**: Initial and minimum window size
//! - **Spinner**: Loading indicator animation

use std::time::Duration;

// ==========================================================================
// Acquisition Defaults
// ==========================================================================

/// Seconds before a location request fails with a timeout.
pub const ACQUISITION_TIMEOUT_SECS: u64 = 10;

/// Oldest cached fix a provider may reuse, in seconds. Zero means always
/// request a fresh fix.
pub const ACQUISITION_MAXIMUM_AGE_SECS: u64 = 0;

/// Whether requests ask for the most precise fix available.
pub const ACQUISITION_HIGH_ACCURACY: bool = true;

/// Whether an acquisition starts as soon as the window opens.
pub const DEFAULT_AUTO_LOCATE: bool = false;

// ==========================================================================
// Map Defaults
// ==========================================================================

/// Whether map tiles are fetched when no setting says otherwise.
pub const DEFAULT_MAP_ENABLED: bool = true;

/// Zoom level of the tile raster. Matches the embedded map.
pub const MAP_TILE_ZOOM: u8 = crate::domain::geo::EMBED_ZOOM;

/// Size of the tile raster in pixels. The surface crops it to fit.
pub const MAP_RENDER_WIDTH: u32 = 896;
pub const MAP_RENDER_HEIGHT: u32 = 512;

/// Seconds before the whole raster is abandoned.
pub const MAP_RENDER_TIMEOUT_SECS: u64 = 15;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 560.0;
pub const MIN_WINDOW_HEIGHT: f32 = 620.0;

// ==========================================================================
// Spinner Defaults
// ==========================================================================

/// Interval between spinner animation frames while loading.
pub const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Spinner rotation per tick, in radians.
pub const SPINNER_SPEED: f32 = 0.3;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(ACQUISITION_TIMEOUT_SECS > 0);
    assert!(MAP_TILE_ZOOM <= crate::domain::geo::MAX_ZOOM);
    assert!(MAP_RENDER_WIDTH > 0 && MAP_RENDER_HEIGHT > 0);
    assert!(MAP_RENDER_TIMEOUT_SECS > 0);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
    assert!(SPINNER_SPEED > 0.0);
    assert!(SPINNER_SPEED < std::f32::consts::TAU);
};

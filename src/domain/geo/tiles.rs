// SPDX-License-Identifier: MPL-2.0
//! Web Mercator tile addressing for the map surface.
//!
//! A [`TileWindow`] is a rectangle of world pixels centred on a position.
//! It lists the slippy-map tiles that cover it and where each tile lands
//! inside the window, so a renderer can stitch them into one [`MapImage`].

use super::Position;
use std::f64::consts::PI;

/// Edge length of one tile, in pixels.
pub const TILE_SIZE: u32 = 256;

/// Latitude limit of the Web Mercator projection.
const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

/// Highest zoom level tile servers commonly serve.
pub const MAX_ZOOM: u8 = 19;

/// Address of one tile on a slippy-map server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

/// A tile together with the offset of its top-left corner in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTile {
    pub coord: TileCoord,
    pub offset_x: i64,
    pub offset_y: i64,
}

/// Rectangle of world pixels centred on a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileWindow {
    zoom: u8,
    left: f64,
    top: f64,
    width: u32,
    height: u32,
}

impl TileWindow {
    /// Window of `width` x `height` pixels with `position` at its centre.
    #[must_use]
    pub fn centered(position: &Position, zoom: u8, width: u32, height: u32) -> Self {
        let zoom = zoom.min(MAX_ZOOM);
        let (x, y) = world_pixel(position, zoom);
        Self {
            zoom,
            left: x - f64::from(width) / 2.0,
            top: y - f64::from(height) / 2.0,
            width,
            height,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tiles covering the window, row by row.
    ///
    /// Columns wrap around the antimeridian. Rows beyond the poles are
    /// skipped and stay blank.
    #[must_use]
    pub fn tiles(&self) -> Vec<PlacedTile> {
        if self.width == 0 || self.height == 0 {
            return Vec::new();
        }

        let size = f64::from(TILE_SIZE);
        let count = 1_i64 << self.zoom;
        let first_x = (self.left / size).floor() as i64;
        let last_x = ((self.left + f64::from(self.width) - 1.0) / size).floor() as i64;
        let first_y = (self.top / size).floor() as i64;
        let last_y = ((self.top + f64::from(self.height) - 1.0) / size).floor() as i64;

        let mut placed = Vec::new();
        for tile_y in first_y..=last_y {
            if !(0..count).contains(&tile_y) {
                continue;
            }
            for tile_x in first_x..=last_x {
                placed.push(PlacedTile {
                    coord: TileCoord {
                        zoom: self.zoom,
                        x: tile_x.rem_euclid(count) as u32,
                        y: tile_y as u32,
                    },
                    offset_x: (tile_x as f64 * size - self.left).round() as i64,
                    offset_y: (tile_y as f64 * size - self.top).round() as i64,
                });
            }
        }
        placed
    }
}

/// RGBA raster of a rendered window.
#[derive(Clone, PartialEq, Eq)]
pub struct MapImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixels.
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for MapImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Position in world pixels at `zoom`, origin at the north-west corner.
fn world_pixel(position: &Position, zoom: u8) -> (f64, f64) {
    let scale = f64::from(TILE_SIZE) * f64::from(1_u32 << zoom);
    let latitude = position
        .latitude()
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();
    let x = (position.longitude() + 180.0) / 360.0 * scale;
    let y = (1.0 - (latitude.tan() + 1.0 / latitude.cos()).ln() / PI) / 2.0 * scale;
    (x, y)
}

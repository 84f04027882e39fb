// SPDX-License-Identifier: MPL-2.0
//! Failures while rendering the map surface.

use std::fmt;

/// Why no map raster could be produced for a position.
///
/// A map failure never affects the located state: the surface falls back to
/// the plain grid with the pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No tile could be fetched.
    Unavailable(String),
    /// The rendering did not finish in time.
    Timeout,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Unavailable(reason) => write!(f, "map tiles unavailable: {reason}"),
            MapError::Timeout => write!(f, "map rendering timed out"),
        }
    }
}

impl std::error::Error for MapError {}

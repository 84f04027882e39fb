// SPDX-License-Identifier: MPL-2.0
//! The coordinate pair produced by a successful location acquisition.

use std::fmt;

/// Latitude bounds in decimal degrees.
const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Longitude bounds in decimal degrees.
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A WGS84 position in decimal degrees.
///
/// A `Position` is always a complete pair and is never mutated; a new
/// acquisition replaces it wholesale. Values are stored exactly as the
/// location provider reported them.
///
/// # Example
///
/// ```
/// use cs_job_finder::domain::geo::Position;
///
/// let nyc = Position::new(40.7128, -74.0060);
/// assert_eq!(nyc.latitude(), 40.7128);
/// assert_eq!(nyc.to_string(), "40.7128,-74.006");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    latitude: f64,
    longitude: f64,
}

/// Reason a coordinate pair was rejected by [`Position::validated`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidPosition {
    /// One of the components is NaN or infinite.
    NotFinite,
    /// Latitude outside -90..=90.
    LatitudeOutOfRange(f64),
    /// Longitude outside -180..=180.
    LongitudeOutOfRange(f64),
}

impl fmt::Display for InvalidPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPosition::NotFinite => write!(f, "coordinates must be finite numbers"),
            InvalidPosition::LatitudeOutOfRange(value) => {
                write!(f, "latitude {value} is outside -90..=90")
            }
            InvalidPosition::LongitudeOutOfRange(value) => {
                write!(f, "longitude {value} is outside -180..=180")
            }
        }
    }
}

impl std::error::Error for InvalidPosition {}

impl Position {
    /// Creates a position from the raw pair, without any adjustment.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a position from untrusted input (network payloads, config
    /// files, command line), rejecting pairs that cannot be a real location.
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self, InvalidPosition> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidPosition::NotFinite);
        }
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(InvalidPosition::LatitudeOutOfRange(latitude));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(InvalidPosition::LongitudeOutOfRange(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Formats the position for humans: "40.712800° N, 74.006000° W".
    #[must_use]
    pub fn format_hemispheres(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }
}

/// Magnitude below which a coordinate is written in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e-6;

/// Writes one coordinate the way map query strings expect it: shortest
/// round-trip decimal, `0` for both zeros, and `1e-7` style below
/// [`EXPONENT_THRESHOLD`].
fn write_coordinate(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        f.write_str("0")
    } else if value.abs() < EXPONENT_THRESHOLD {
        write!(f, "{value:e}")
    } else {
        write!(f, "{value}")
    }
}

/// `lat,lng` as used in the map URLs.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinate(f, self.latitude)?;
        f.write_str(",")?;
        write_coordinate(f, self.longitude)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Location acquisition failures.
//!
//! [`FailureCode`] is what a location provider reports; [`GeolocationError`]
//! is what the user sees. The conversion between the two is the only
//! classification step in the acquisition flow.

use std::fmt;

/// Failure reported by a location provider for a single request.
///
/// The numeric codes follow the W3C Geolocation API so providers that
/// forward platform errors can map them with [`FailureCode::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCode {
    /// The user or the platform refused access to the location.
    PermissionDenied,
    /// The location could not be determined.
    PositionUnavailable,
    /// No fix arrived before the request timeout.
    Timeout,
    /// Any code outside the three known ones.
    Unknown(u16),
}

impl FailureCode {
    /// Maps a W3C `GeolocationPositionError.code` value.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => FailureCode::PermissionDenied,
            2 => FailureCode::PositionUnavailable,
            3 => FailureCode::Timeout,
            other => FailureCode::Unknown(other),
        }
    }

    /// Returns the W3C numeric code.
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            FailureCode::PermissionDenied => 1,
            FailureCode::PositionUnavailable => 2,
            FailureCode::Timeout => 3,
            FailureCode::Unknown(code) => code,
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCode::PermissionDenied => write!(f, "permission denied"),
            FailureCode::PositionUnavailable => write!(f, "position unavailable"),
            FailureCode::Timeout => write!(f, "timeout"),
            FailureCode::Unknown(code) => write!(f, "unknown failure (code {code})"),
        }
    }
}

/// User-facing outcome of a failed acquisition.
///
/// Every variant is terminal for the attempt and leaves the application
/// waiting for a manual retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    /// No location capability is available at all. Detected before any
    /// request is made.
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    /// Anything the provider could not classify.
    Unclassified,
}

impl GeolocationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GeolocationError::Unsupported => "error-geolocation-unsupported",
            GeolocationError::PermissionDenied => "error-geolocation-permission-denied",
            GeolocationError::PositionUnavailable => "error-geolocation-unavailable",
            GeolocationError::Timeout => "error-geolocation-timeout",
            GeolocationError::Unclassified => "error-geolocation-unclassified",
        }
    }
}

impl From<FailureCode> for GeolocationError {
    fn from(code: FailureCode) -> Self {
        match code {
            FailureCode::PermissionDenied => GeolocationError::PermissionDenied,
            FailureCode::PositionUnavailable => GeolocationError::PositionUnavailable,
            FailureCode::Timeout => GeolocationError::Timeout,
            FailureCode::Unknown(_) => GeolocationError::Unclassified,
        }
    }
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeolocationError::Unsupported => {
                write!(f, "Geolocation is not supported by your browser.")
            }
            GeolocationError::PermissionDenied => write!(
                f,
                "Location permission denied. Please enable location services."
            ),
            GeolocationError::PositionUnavailable => write!(f, "Location unavailable."),
            GeolocationError::Timeout => write!(f, "Request timed out."),
            GeolocationError::Unclassified => write!(f, "Unable to retrieve your location."),
        }
    }
}

impl std::error::Error for GeolocationError {}

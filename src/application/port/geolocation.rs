// SPDX-License-Identifier: MPL-2.0
//! Geolocation port definition.
//!
//! A [`LocationProvider`] answers one request with exactly one outcome:
//! a [`Position`] or a [`FailureCode`]. The absence of a provider is how the
//! application models a platform without any location capability.

use crate::domain::error::FailureCode;
use crate::domain::geo::Position;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Hard limit for a single request when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Boxed future returned by [`LocationProvider::request`].
pub type LocationFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Position, FailureCode>> + Send + 'a>>;

/// Options for a single location request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    /// Ask for the most precise fix the provider can produce.
    pub high_accuracy: bool,
    /// Fail with [`FailureCode::Timeout`] when no fix arrives in time.
    pub timeout: Duration,
    /// Oldest cached fix the provider may reuse. Zero forces a fresh fix.
    pub maximum_age: Duration,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: DEFAULT_TIMEOUT,
            maximum_age: Duration::ZERO,
        }
    }
}

/// A source of the user's current position.
pub trait LocationProvider: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Starts one acquisition.
    fn request(&self, options: RequestOptions) -> LocationFuture<'_>;
}

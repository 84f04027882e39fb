// SPDX-License-Identifier: MPL-2.0
//! Provider used when the user has not allowed location access.

use crate::application::port::{LocationFuture, LocationProvider, RequestOptions};
use crate::domain::error::FailureCode;

/// Refuses every request with [`FailureCode::PermissionDenied`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedProvider;

impl LocationProvider for DeniedProvider {
    fn name(&self) -> &'static str {
        "denied"
    }

    fn request(&self, _options: RequestOptions) -> LocationFuture<'_> {
        Box::pin(async { Err(FailureCode::PermissionDenied) })
    }
}

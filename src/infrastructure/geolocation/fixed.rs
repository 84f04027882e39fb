// SPDX-License-Identifier: MPL-2.0
//! Provider that always reports the same position.
//!
//! Useful on machines without any location service, or to scout an area
//! other than the one you are in.

use crate::application::port::{LocationFuture, LocationProvider, RequestOptions};
use crate::domain::geo::Position;

#[derive(Debug, Clone, Copy)]
pub struct FixedProvider {
    position: Position,
}

impl FixedProvider {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl LocationProvider for FixedProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn request(&self, _options: RequestOptions) -> LocationFuture<'_> {
        let position = self.position;
        Box::pin(async move { Ok(position) })
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the UI can be driven by a real
//! platform adapter or by a scripted one in tests.
//!
//! # Available Ports
//!
//! - [`geolocation`]: One-shot location acquisition
//! - [`map`]: Raster of the area around a position

pub mod geolocation;
pub mod map;

pub use geolocation::{LocationFuture, LocationProvider, RequestOptions};
pub use map::{MapFuture, MapRenderer, RenderOptions};

// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the thin wrapper around the OS URL launcher.
//!
//! # Available Adapters
//!
//! - [`geolocation`]: Location providers (implement [`LocationProvider`])
//! - [`map`]: Tile server raster (implements [`MapRenderer`])
//! - [`launcher`]: Hands URLs to the default browser
//!
//! [`LocationProvider`]: crate::application::port::LocationProvider
//! [`MapRenderer`]: crate::application::port::MapRenderer

pub mod geolocation;
pub mod launcher;
pub mod map;

pub use geolocation::{
    provider_from_config, DeniedProvider, FixedProvider, IpLookupProvider, ProviderOverrides,
};
pub use map::{renderer_from_config, TileServerRenderer};

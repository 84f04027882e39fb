// SPDX-License-Identifier: MPL-2.0
//! Map rendering port definition.
//!
//! A [`MapRenderer`] turns a [`TileWindow`] into one RGBA raster. The
//! absence of a renderer leaves the map surface as a plain grid with a pin.

use crate::domain::error::MapError;
use crate::domain::geo::{MapImage, TileWindow};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Boxed future returned by [`MapRenderer::render`].
pub type MapFuture<'a> = Pin<Box<dyn Future<Output = Result<MapImage, MapError>> + Send + 'a>>;

/// Size and scale of the raster drawn behind the located position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub zoom: u8,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Give up on the whole raster after this long.
    pub timeout: Duration,
}

/// A source of map rasters.
pub trait MapRenderer: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Renders `window`.
    fn render(&self, window: TileWindow) -> MapFuture<'_>;
}

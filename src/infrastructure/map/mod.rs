// SPDX-License-Identifier: MPL-2.0
//! Map renderer adapters and their selection from configuration.

mod tile_server;

pub use tile_server::{compose, tile_url, TileServerRenderer, DEFAULT_TILE_ENDPOINT};

use crate::application::port::MapRenderer;
use crate::config::{MapConfig, DEFAULT_MAP_ENABLED};
use std::sync::Arc;

/// Builds the map renderer described by `config`.
///
/// Returns `None` when tiles are disabled by the settings or by `disabled`
/// (`--no-map`); the map surface then stays a plain grid with the pin.
pub fn renderer_from_config(config: &MapConfig, disabled: bool) -> Option<Arc<dyn MapRenderer>> {
    if disabled || !config.enabled.unwrap_or(DEFAULT_MAP_ENABLED) {
        tracing::info!("map tiles disabled");
        return None;
    }

    let template = config
        .tile_endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_TILE_ENDPOINT.to_string());
    match TileServerRenderer::new(template) {
        Ok(renderer) => {
            tracing::info!(template = renderer.template(), "using tile server");
            Some(Arc::new(renderer))
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to build tile server client");
            None
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Map rendering use case.

use crate::application::port::{MapRenderer, RenderOptions};
use crate::domain::error::MapError;
use crate::domain::geo::{MapImage, Position, TileWindow};
use std::sync::Arc;
use std::time::Instant;

/// Renders the area centred on `position`, enforcing `options.timeout`.
pub async fn render_area(
    renderer: Arc<dyn MapRenderer>,
    position: Position,
    options: RenderOptions,
) -> Result<MapImage, MapError> {
    let started = Instant::now();
    let window = TileWindow::centered(&position, options.zoom, options.width, options.height);
    tracing::debug!(
        renderer = renderer.name(),
        %position,
        zoom = window.zoom(),
        tiles = window.tiles().len(),
        "rendering map"
    );

    let outcome = match tokio::time::timeout(options.timeout, renderer.render(window)).await {
        Ok(result) => result,
        Err(_elapsed) => Err(MapError::Timeout),
    };

    let elapsed_ms = started.elapsed().as_millis() as u64;
    match &outcome {
        Ok(image) => tracing::debug!(
            renderer = renderer.name(),
            elapsed_ms,
            width = image.width,
            height = image.height,
            "map rendered"
        ),
        Err(error) => tracing::warn!(
            renderer = renderer.name(),
            elapsed_ms,
            %error,
            "map rendering failed"
        ),
    }
    outcome
}

// SPDX-License-Identifier: MPL-2.0
//! Geographic value objects, the map queries built from them and the tile
//! grid behind the map surface.

mod map_query;
mod position;
mod tiles;

pub use map_query::{
    embed_url, external_url, EMBED_QUERY, EMBED_ZOOM, EXTERNAL_QUERY, EXTERNAL_ZOOM,
};
pub use position::{InvalidPosition, Position};
pub use tiles::{MapImage, PlacedTile, TileCoord, TileWindow, MAX_ZOOM, TILE_SIZE};

// SPDX-License-Identifier: MPL-2.0
//! Map query URLs derived from a [`Position`].
//!
//! Both URLs are recomputed on demand from the current position; nothing
//! here is cached.

use super::Position;

/// Search text sent to the embedded map widget.
pub const EMBED_QUERY: &str = "homeless+shelters";

/// Search text used when opening the full map application.
pub const EXTERNAL_QUERY: &str = "homeless+shelter";

/// Zoom level of the embedded map.
pub const EMBED_ZOOM: u8 = 13;

/// Zoom level of the full map application.
pub const EXTERNAL_ZOOM: u8 = 14;

/// Source URL of the embedded map frame for `position`.
#[must_use]
pub fn embed_url(position: &Position) -> String {
    format!(
        "https://maps.google.com/maps?q={EMBED_QUERY}+{position}&t=&z={EMBED_ZOOM}&ie=UTF8&iwloc=&output=embed"
    )
}

/// URL that opens the same search in the full map application.
#[must_use]
pub fn external_url(position: &Position) -> String {
    format!("https://www.google.com/maps/search/{EXTERNAL_QUERY}/@{position},{EXTERNAL_ZOOM}z")
}

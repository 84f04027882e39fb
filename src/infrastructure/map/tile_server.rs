// SPDX-License-Identifier: MPL-2.0
//! Map raster stitched from a slippy-map tile server.
//!
//! Every tile covering the window is downloaded concurrently, decoded and
//! laid onto one canvas. Tiles that fail are logged and left blank; the
//! raster only fails when no tile arrived at all.

use crate::application::port::{MapFuture, MapRenderer};
use crate::domain::error::MapError;
use crate::domain::geo::{MapImage, PlacedTile, TileCoord, TileWindow};
use image_rs::{imageops, Rgba, RgbaImage};
use tokio::task::JoinSet;

/// Public OpenStreetMap tile server.
pub const DEFAULT_TILE_ENDPOINT: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Fill for parts of the window no tile covers.
const BLANK: Rgba<u8> = Rgba([0xE5, 0xE3, 0xDF, 0xFF]);

/// Renderer backed by an HTTP tile server.
#[derive(Debug)]
pub struct TileServerRenderer {
    client: reqwest::Client,
    template: String,
}

impl TileServerRenderer {
    /// Creates a renderer for a `{z}/{x}/{y}` URL template.
    pub fn new(template: impl Into<String>) -> Result<Self, reqwest::Error> {
        // Tile usage policies require an identifying user agent.
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self {
            client,
            template: template.into(),
        })
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    async fn render_window(&self, window: TileWindow) -> Result<MapImage, MapError> {
        let mut downloads = JoinSet::new();
        for tile in window.tiles() {
            let client = self.client.clone();
            let url = tile_url(&self.template, tile.coord);
            downloads.spawn(async move {
                let fetched = fetch_tile(&client, &url).await;
                (tile, url, fetched)
            });
        }

        let mut fetched = Vec::new();
        let mut last_failure = None;
        while let Some(joined) = downloads.join_next().await {
            match joined {
                Ok((tile, _, Ok(image))) => fetched.push((tile, image)),
                Ok((_, url, Err(reason))) => {
                    tracing::warn!(%url, %reason, "map tile unavailable");
                    last_failure = Some(reason);
                }
                Err(error) => {
                    tracing::warn!(%error, "map tile download aborted");
                    last_failure = Some(error.to_string());
                }
            }
        }

        if fetched.is_empty() {
            return Err(MapError::Unavailable(
                last_failure.unwrap_or_else(|| "no tile covers this area".to_string()),
            ));
        }
        Ok(compose(&window, &fetched))
    }
}

impl MapRenderer for TileServerRenderer {
    fn name(&self) -> &'static str {
        "tile-server"
    }

    fn render(&self, window: TileWindow) -> MapFuture<'_> {
        Box::pin(self.render_window(window))
    }
}

/// Fills the `{z}`, `{x}` and `{y}` placeholders of `template`.
#[must_use]
pub fn tile_url(template: &str, coord: TileCoord) -> String {
    template
        .replace("{z}", &coord.zoom.to_string())
        .replace("{x}", &coord.x.to_string())
        .replace("{y}", &coord.y.to_string())
}

/// Lays decoded tiles onto a blank canvas the size of `window`.
#[must_use]
pub fn compose(window: &TileWindow, tiles: &[(PlacedTile, RgbaImage)]) -> MapImage {
    let mut canvas = RgbaImage::from_pixel(window.width(), window.height(), BLANK);
    for (tile, image) in tiles {
        imageops::overlay(&mut canvas, image, tile.offset_x, tile.offset_y);
    }
    MapImage {
        width: window.width(),
        height: window.height(),
        pixels: canvas.into_raw(),
    }
}

async fn fetch_tile(client: &reqwest::Client, url: &str) -> Result<RgbaImage, String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| err.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(status.to_string());
    }

    let body = response.bytes().await.map_err(|err| err.to_string())?;
    image_rs::load_from_memory(&body)
        .map(|decoded| decoded.to_rgba8())
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::{Position, TILE_SIZE};
    use std::io::Cursor;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    fn solid_tile(color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(TILE_SIZE, TILE_SIZE, color)
    }

    fn png_bytes(color: Rgba<u8>) -> Vec<u8> {
        let mut bytes = Vec::new();
        solid_tile(color)
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    fn pixel(image: &MapImage, x: u32, y: u32) -> [u8; 4] {
        let index = ((y * image.width + x) * 4) as usize;
        [
            image.pixels[index],
            image.pixels[index + 1],
            image.pixels[index + 2],
            image.pixels[index + 3],
        ]
    }

    async fn tile_server(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/\d+/\d+/\d+\.png$"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn renderer_for(server: &MockServer) -> TileServerRenderer {
        TileServerRenderer::new(format!("{}/{{z}}/{{x}}/{{y}}.png", server.uri())).expect("client")
    }

    #[test]
    fn tile_url_fills_placeholders() {
        let coord = TileCoord {
            zoom: 13,
            x: 2411,
            y: 3080,
        };
        assert_eq!(
            tile_url(DEFAULT_TILE_ENDPOINT, coord),
            "https://tile.openstreetmap.org/13/2411/3080.png"
        );
    }

    #[test]
    fn compose_places_tiles_at_their_offsets() {
        let window = TileWindow::centered(&Position::new(0.0, 0.0), 1, 256, 256);
        let placed = window.tiles();
        let tiles = vec![(placed[0], solid_tile(RED)), (placed[3], solid_tile(GREEN))];

        let image = compose(&window, &tiles);

        assert_eq!(image.pixels.len(), 256 * 256 * 4);
        assert_eq!(pixel(&image, 0, 0), RED.0);
        assert_eq!(pixel(&image, 127, 127), RED.0);
        assert_eq!(pixel(&image, 128, 128), GREEN.0);
        assert_eq!(pixel(&image, 200, 10), BLANK.0);
    }

    #[tokio::test]
    async fn stitches_every_tile_of_the_window() {
        let template = ResponseTemplate::new(200)
            .insert_header("content-type", "image/png")
            .set_body_bytes(png_bytes(GREEN));
        let server = tile_server(template).await;
        let window = TileWindow::centered(&Position::new(40.7128, -74.006), 13, 512, 256);

        let image = renderer_for(&server)
            .render(window)
            .await
            .expect("all tiles served");

        assert_eq!((image.width, image.height), (512, 256));
        assert!(image.pixels.chunks_exact(4).all(|rgba| rgba == GREEN.0));
        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests.len(), window.tiles().len());
    }

    #[tokio::test]
    async fn requested_tiles_follow_the_position() {
        let template = ResponseTemplate::new(200).set_body_bytes(png_bytes(GREEN));

        let mut paths = Vec::new();
        for position in [Position::new(40.7128, -74.006), Position::new(48.8566, 2.3522)] {
            let server = tile_server(template.clone()).await;
            let window = TileWindow::centered(&position, 13, 256, 256);
            renderer_for(&server)
                .render(window)
                .await
                .expect("all tiles served");

            let mut requested: Vec<String> = server
                .received_requests()
                .await
                .expect("recording enabled")
                .iter()
                .map(|request| request.url.path().to_string())
                .collect();
            requested.sort();
            paths.push(requested);
        }

        assert!(paths[0].contains(&"/13/2411/3080.png".to_string()));
        assert!(paths[1].contains(&"/13/4149/2818.png".to_string()));
        assert!(paths[0].iter().all(|path| !paths[1].contains(path)));
    }

    #[tokio::test]
    async fn missing_tiles_make_the_map_unavailable() {
        let server = tile_server(ResponseTemplate::new(404)).await;
        let window = TileWindow::centered(&Position::new(0.0, 0.0), 2, 256, 256);

        let result = renderer_for(&server).render(window).await;

        assert!(matches!(result, Err(MapError::Unavailable(_))), "{result:?}");
    }

    #[tokio::test]
    async fn undecodable_tiles_make_the_map_unavailable() {
        let server = tile_server(ResponseTemplate::new(200).set_body_string("rate limited")).await;
        let window = TileWindow::centered(&Position::new(0.0, 0.0), 2, 256, 256);

        let result = renderer_for(&server).render(window).await;

        assert!(matches!(result, Err(MapError::Unavailable(_))), "{result:?}");
    }
}

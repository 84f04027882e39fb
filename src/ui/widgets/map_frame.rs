// SPDX-License-Identifier: MPL-2.0
//! Map surface for the located state.
//!
//! The surface is addressed by the embed URL and centred on the position.
//! Once the tile raster for the position is rendered it fills the surface;
//! until then, or when tiles are disabled, a neutral grid stands in. The pin
//! always marks the centre, which is where the position lies.

use crate::domain::geo::{embed_url, Position};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{image, Image, Stack};
use iced::{mouse, Color, ContentFit, Element, Length, Point, Rectangle, Renderer, Theme};

/// Distance between grid lines, in logical pixels.
const GRID_STEP: f32 = 40.0;

/// Radius of the pin head.
const PIN_RADIUS: f32 = 10.0;

/// Map surface centred on one position.
pub struct MapFrame<'a> {
    source: String,
    tiles: Option<&'a image::Handle>,
    accent: Color,
}

impl<'a> MapFrame<'a> {
    /// Creates a frame whose source is the embed URL for `position`.
    #[must_use]
    pub fn new(position: &Position, tiles: Option<&'a image::Handle>, accent: Color) -> Self {
        Self {
            source: embed_url(position),
            tiles,
            accent,
        }
    }

    /// The URL loaded into this frame.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the tile raster is shown instead of the grid.
    #[must_use]
    pub fn has_tiles(&self) -> bool {
        self.tiles.is_some()
    }

    pub fn into_element<Message: 'a>(self, height: f32) -> Element<'a, Message> {
        let overlay = Overlay {
            cache: Cache::default(),
            accent: self.accent,
            grid: self.tiles.is_none(),
        };
        let overlay = Canvas::new(overlay)
            .width(Length::Fill)
            .height(Length::Fixed(height));

        match self.tiles {
            Some(tiles) => Stack::new()
                .push(
                    Image::new(tiles.clone())
                        .content_fit(ContentFit::Cover)
                        .width(Length::Fill)
                        .height(Length::Fixed(height)),
                )
                .push(overlay)
                .into(),
            None => overlay.into(),
        }
    }
}

/// Canvas drawn above the raster: the pin, plus the grid when there is no
/// raster underneath.
struct Overlay {
    cache: Cache,
    accent: Color,
    grid: bool,
}

impl<Message> canvas::Program<Message> for Overlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let extended = theme.extended_palette();
        let background = extended.background.weak.color;
        let grid = Color {
            a: 0.25,
            ..extended.background.strong.color
        };

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                if self.grid {
                    frame.fill_rectangle(Point::ORIGIN, frame.size(), background);

                    let mut x = GRID_STEP;
                    while x < frame.width() {
                        let line = Path::line(Point::new(x, 0.0), Point::new(x, frame.height()));
                        frame.stroke(&line, Stroke::default().with_width(1.0).with_color(grid));
                        x += GRID_STEP;
                    }
                    let mut y = GRID_STEP;
                    while y < frame.height() {
                        let line = Path::line(Point::new(0.0, y), Point::new(frame.width(), y));
                        frame.stroke(&line, Stroke::default().with_width(1.0).with_color(grid));
                        y += GRID_STEP;
                    }
                }

                // The tip of the pin sits on the position.
                let tip = frame.center();
                let head_center = Point::new(tip.x, tip.y - PIN_RADIUS * 2.0);
                let stem = Path::line(head_center, tip);
                frame.stroke(
                    &stem,
                    Stroke::default().with_width(3.0).with_color(self.accent),
                );
                frame.fill(&Path::circle(head_center, PIN_RADIUS), self.accent);
                frame.fill(&Path::circle(head_center, PIN_RADIUS / 2.5), Color::WHITE);
            });

        vec![geometry]
    }
}

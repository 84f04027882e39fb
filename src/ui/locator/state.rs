// SPDX-License-Identifier: MPL-2.0
//! State machine of the location-gated view.
//!
//! ```text
//! Idle ──acquire──▶ Loading ──fix──▶ Located ──refresh──▶ Loading
//!   ▲                  │                                    │
//!   └────failure───────┘          Located ◀──failure────────┘
//! ```
//!
//! A failed refresh keeps the previous coordinates on screen and shows the
//! error next to them. Results of superseded requests are dropped.
//!
//! Every new fix asks for a map raster of the surrounding area. A raster is
//! kept only while it matches the coordinates on screen.

use crate::application::port::RequestOptions;
use crate::config::SPINNER_SPEED;
use crate::domain::error::{FailureCode, GeolocationError, MapError};
use crate::domain::geo::{external_url, Position};
use iced::widget::image;

/// Identifies one acquisition. Only the most recent token may change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Messages handled by the locator.
#[derive(Debug, Clone)]
pub enum Message {
    /// "Scan for Jobs Nearby" or "Refresh Area" was pressed.
    AcquireRequested,
    /// A location request finished.
    LocationResolved {
        token: RequestToken,
        result: Result<Position, FailureCode>,
    },
    /// "Open Maps App" or "View Full List" was pressed.
    OpenExternalMapRequested,
    /// Advance the loading spinner.
    SpinnerTick,
    /// The map raster around `position` finished rendering.
    MapRendered {
        position: Position,
        result: Result<image::Handle, MapError>,
    },
}

/// Work the application must perform after a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start a location request and report back with `token`.
    RequestLocation {
        token: RequestToken,
        options: RequestOptions,
    },
    /// Open this URL in the default browser.
    OpenExternal(String),
    /// Render the map raster around this position.
    RenderMap(Position),
}

/// The single view state derived from [`State`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState {
    /// No position yet: call to action, plus the last error if any.
    Idle { error: Option<GeolocationError> },
    /// A request is outstanding.
    Loading,
    /// A position is known. `error` is set when the latest refresh failed.
    Located {
        position: Position,
        error: Option<GeolocationError>,
    },
}

/// Map raster together with the position it is centred on.
#[derive(Debug, Clone)]
struct MapSurface {
    position: Position,
    tiles: image::Handle,
}

/// Locator component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    coordinates: Option<Position>,
    loading: bool,
    error: Option<GeolocationError>,
    /// Last token handed out; tokens start at 1.
    last_token: u64,
    options: RequestOptions,
    spinner_rotation: f32,
    map: Option<MapSurface>,
}

impl State {
    /// Creates an idle locator that will issue requests with `options`.
    #[must_use]
    pub fn new(options: RequestOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Applies `message`. `geolocation_available` tells whether a location
    /// provider exists at all.
    pub fn handle(&mut self, message: Message, geolocation_available: bool) -> Effect {
        match message {
            Message::AcquireRequested => self.begin_acquisition(geolocation_available),
            Message::LocationResolved { token, result } => self.finish_acquisition(token, result),
            Message::OpenExternalMapRequested => match self.coordinates {
                Some(position) => Effect::OpenExternal(external_url(&position)),
                None => Effect::None,
            },
            Message::SpinnerTick => {
                if self.loading {
                    self.spinner_rotation =
                        (self.spinner_rotation + SPINNER_SPEED) % std::f32::consts::TAU;
                }
                Effect::None
            }
            Message::MapRendered { position, result } => {
                self.store_map(position, result);
                Effect::None
            }
        }
    }

    fn begin_acquisition(&mut self, geolocation_available: bool) -> Effect {
        if !geolocation_available {
            tracing::warn!("location requested but no provider is available");
            self.error = Some(GeolocationError::Unsupported);
            return Effect::None;
        }

        self.loading = true;
        self.error = None;
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        tracing::debug!(token = token.value(), "acquisition started");

        Effect::RequestLocation {
            token,
            options: self.options,
        }
    }

    fn finish_acquisition(
        &mut self,
        token: RequestToken,
        result: Result<Position, FailureCode>,
    ) -> Effect {
        if token.value() != self.last_token {
            tracing::debug!(
                token = token.value(),
                latest = self.last_token,
                "dropping result of superseded request"
            );
            return Effect::None;
        }

        self.loading = false;
        self.spinner_rotation = 0.0;
        match result {
            Ok(position) => {
                self.coordinates = Some(position);
                if self.map.as_ref().is_some_and(|map| map.position == position) {
                    return Effect::None;
                }
                self.map = None;
                Effect::RenderMap(position)
            }
            Err(code) => {
                tracing::debug!(code = code.code(), "acquisition failed");
                self.error = Some(GeolocationError::from(code));
                Effect::None
            }
        }
    }

    fn store_map(&mut self, position: Position, result: Result<image::Handle, MapError>) {
        if self.coordinates != Some(position) {
            tracing::debug!(%position, "dropping map of a previous position");
            return;
        }
        match result {
            Ok(tiles) => self.map = Some(MapSurface { position, tiles }),
            Err(error) => tracing::debug!(%error, "keeping the plain map surface"),
        }
    }

    /// Returns the state the view should render.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        if self.loading {
            return ViewState::Loading;
        }
        match self.coordinates {
            Some(position) => ViewState::Located {
                position,
                error: self.error,
            },
            None => ViewState::Idle { error: self.error },
        }
    }

    /// Token of the outstanding request, if one is in flight.
    #[must_use]
    pub fn pending_token(&self) -> Option<RequestToken> {
        self.loading.then_some(RequestToken(self.last_token))
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<Position> {
        self.coordinates
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<GeolocationError> {
        self.error
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Map raster for the coordinates on screen, once rendered.
    #[must_use]
    pub fn map_tiles(&self) -> Option<&image::Handle> {
        self.map
            .as_ref()
            .filter(|map| Some(map.position) == self.coordinates)
            .map(|map| &map.tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: Position = Position::new(40.7128, -74.0060);
    const PARIS: Position = Position::new(48.8566, 2.3522);

    fn request(state: &mut State) -> RequestToken {
        match state.handle(Message::AcquireRequested, true) {
            Effect::RequestLocation { token, .. } => token,
            other => panic!("expected a location request, got {other:?}"),
        }
    }

    fn resolve(
        state: &mut State,
        token: RequestToken,
        result: Result<Position, FailureCode>,
    ) -> Effect {
        state.handle(Message::LocationResolved { token, result }, true)
    }

    fn raster() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn map_ready(state: &mut State, position: Position) {
        state.handle(
            Message::MapRendered {
                position,
                result: Ok(raster()),
            },
            true,
        );
    }

    #[test]
    fn starts_idle_without_error() {
        let state = State::default();
        assert_eq!(state.view_state(), ViewState::Idle { error: None });
        assert!(!state.is_loading());
        assert!(state.coordinates().is_none());
    }

    #[test]
    fn acquisition_enters_loading_with_configured_options() {
        let mut state = State::new(RequestOptions::default());
        let effect = state.handle(Message::AcquireRequested, true);

        match effect {
            Effect::RequestLocation { options, .. } => {
                assert_eq!(options, RequestOptions::default());
            }
            other => panic!("expected a location request, got {other:?}"),
        }
        assert!(state.is_loading());
        assert_eq!(state.view_state(), ViewState::Loading);
    }

    #[test]
    fn success_stores_fix_exactly() {
        let mut state = State::default();
        let token = request(&mut state);
        resolve(&mut state, token, Ok(NYC));

        assert_eq!(state.coordinates(), Some(NYC));
        assert!(!state.is_loading());
        assert_eq!(
            state.view_state(),
            ViewState::Located {
                position: NYC,
                error: None
            }
        );
    }

    #[test]
    fn each_failure_code_sets_its_message() {
        let cases = [
            (
                FailureCode::PermissionDenied,
                "Location permission denied. Please enable location services.",
            ),
            (FailureCode::PositionUnavailable, "Location unavailable."),
            (FailureCode::Timeout, "Request timed out."),
            (FailureCode::Unknown(0), "Unable to retrieve your location."),
        ];

        for (code, message) in cases {
            let mut state = State::default();
            let token = request(&mut state);
            resolve(&mut state, token, Err(code));

            assert!(!state.is_loading());
            let error = state.error().expect("error should be set");
            assert_eq!(error.to_string(), message);
            assert_eq!(state.view_state(), ViewState::Idle { error: Some(error) });
        }
    }

    #[test]
    fn missing_capability_never_enters_loading() {
        let mut state = State::default();
        let effect = state.handle(Message::AcquireRequested, false);

        assert_eq!(effect, Effect::None);
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(GeolocationError::Unsupported));
        assert_eq!(
            state.error().map(|e| e.to_string()).as_deref(),
            Some("Geolocation is not supported by your browser.")
        );
    }

    #[test]
    fn new_acquisition_clears_previous_error() {
        let mut state = State::default();
        let token = request(&mut state);
        resolve(&mut state, token, Err(FailureCode::Timeout));
        assert!(state.error().is_some());

        request(&mut state);
        assert!(state.error().is_none());
    }

    #[test]
    fn pending_token_tracks_latest_request() {
        let mut state = State::default();
        assert_eq!(state.pending_token(), None);

        let _first = request(&mut state);
        let second = request(&mut state);
        assert_eq!(state.pending_token(), Some(second));

        resolve(&mut state, second, Ok(NYC));
        assert_eq!(state.pending_token(), None);
    }

    #[test]
    fn refresh_replaces_coordinates_wholesale() {
        let mut state = State::default();
        let first = request(&mut state);
        resolve(&mut state, first, Ok(NYC));

        let second = request(&mut state);
        assert_eq!(state.view_state(), ViewState::Loading);
        resolve(&mut state, second, Ok(PARIS));

        assert_eq!(state.coordinates(), Some(PARIS));
    }

    #[test]
    fn failed_refresh_keeps_stale_position_and_shows_error() {
        let mut state = State::default();
        let first = request(&mut state);
        resolve(&mut state, first, Ok(NYC));

        let second = request(&mut state);
        resolve(&mut state, second, Err(FailureCode::PositionUnavailable));

        assert_eq!(
            state.view_state(),
            ViewState::Located {
                position: NYC,
                error: Some(GeolocationError::PositionUnavailable)
            }
        );
    }

    #[test]
    fn superseded_result_is_ignored() {
        let mut state = State::default();
        let stale = request(&mut state);
        let latest = request(&mut state);
        assert!(latest > stale);

        resolve(&mut state, latest, Ok(PARIS));
        resolve(&mut state, stale, Ok(NYC));

        assert_eq!(state.coordinates(), Some(PARIS));
        assert!(!state.is_loading());
    }

    #[test]
    fn superseded_result_does_not_end_loading() {
        let mut state = State::default();
        let stale = request(&mut state);
        let _latest = request(&mut state);

        resolve(&mut state, stale, Err(FailureCode::Timeout));

        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn open_external_without_coordinates_is_noop() {
        let mut state = State::default();
        let effect = state.handle(Message::OpenExternalMapRequested, true);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn open_external_uses_current_coordinates() {
        let mut state = State::default();
        let token = request(&mut state);
        resolve(&mut state, token, Ok(NYC));

        let effect = state.handle(Message::OpenExternalMapRequested, true);
        assert_eq!(
            effect,
            Effect::OpenExternal(
                "https://www.google.com/maps/search/homeless+shelter/@40.7128,-74.006,14z"
                    .to_string()
            )
        );
    }

    #[test]
    fn successful_fix_requests_a_map_of_that_position() {
        let mut state = State::default();
        let token = request(&mut state);
        assert_eq!(resolve(&mut state, token, Ok(NYC)), Effect::RenderMap(NYC));
        assert!(state.map_tiles().is_none());

        map_ready(&mut state, NYC);
        assert!(state.map_tiles().is_some());
    }

    #[test]
    fn failed_fix_requests_no_map() {
        let mut state = State::default();
        let token = request(&mut state);
        assert_eq!(
            resolve(&mut state, token, Err(FailureCode::Timeout)),
            Effect::None
        );
    }

    #[test]
    fn map_of_a_previous_position_is_dropped() {
        let mut state = State::default();
        let first = request(&mut state);
        resolve(&mut state, first, Ok(NYC));
        let second = request(&mut state);
        resolve(&mut state, second, Ok(PARIS));

        map_ready(&mut state, NYC);
        assert!(state.map_tiles().is_none());

        map_ready(&mut state, PARIS);
        assert!(state.map_tiles().is_some());
    }

    #[test]
    fn moving_clears_the_old_map() {
        let mut state = State::default();
        let first = request(&mut state);
        resolve(&mut state, first, Ok(NYC));
        map_ready(&mut state, NYC);

        let second = request(&mut state);
        assert_eq!(resolve(&mut state, second, Ok(PARIS)), Effect::RenderMap(PARIS));
        assert!(state.map_tiles().is_none());
    }

    #[test]
    fn same_position_keeps_the_map_without_rendering_again() {
        let mut state = State::default();
        let first = request(&mut state);
        resolve(&mut state, first, Ok(NYC));
        map_ready(&mut state, NYC);

        let second = request(&mut state);
        assert_eq!(resolve(&mut state, second, Ok(NYC)), Effect::None);
        assert!(state.map_tiles().is_some());
    }

    #[test]
    fn failed_render_keeps_the_plain_surface() {
        let mut state = State::default();
        let token = request(&mut state);
        resolve(&mut state, token, Ok(NYC));

        state.handle(
            Message::MapRendered {
                position: NYC,
                result: Err(MapError::Timeout),
            },
            true,
        );

        assert!(state.map_tiles().is_none());
        assert_eq!(
            state.view_state(),
            ViewState::Located {
                position: NYC,
                error: None
            }
        );
    }

    #[test]
    fn spinner_only_moves_while_loading() {
        let mut state = State::default();
        state.handle(Message::SpinnerTick, true);
        assert_eq!(state.spinner_rotation(), 0.0);

        request(&mut state);
        state.handle(Message::SpinnerTick, true);
        assert!(state.spinner_rotation() > 0.0);
        assert!(state.spinner_rotation() < std::f32::consts::TAU);
    }
}

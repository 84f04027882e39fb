// SPDX-License-Identifier: MPL-2.0
use cs_job_finder::app::{self, paths, App, Flags};
use cs_job_finder::application::port::{
    LocationFuture, LocationProvider, MapFuture, MapRenderer, RenderOptions, RequestOptions,
};
use cs_job_finder::application::{acquire, render_area};
use cs_job_finder::config::{self, Config, GeneralConfig, LocationConfig, ProviderKind};
use cs_job_finder::domain::error::{FailureCode, GeolocationError};
use cs_job_finder::domain::geo::{embed_url, external_url, MapImage, Position, TileWindow};
use cs_job_finder::i18n::fluent::I18n;
use cs_job_finder::infrastructure::{provider_from_config, ProviderOverrides};
use cs_job_finder::ui::locator::{Effect, Message, State, ViewState};
use cs_job_finder::ui::navbar;
use cs_job_finder::ui::theming::ThemeMode;
use iced::widget::image;
use std::collections::VecDeque;
use std::fs;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

/// Provider that replays a fixed list of outcomes, one per request.
#[derive(Debug)]
struct ScriptedProvider {
    outcomes: Mutex<VecDeque<Result<Position, FailureCode>>>,
}

impl ScriptedProvider {
    fn new(outcomes: impl IntoIterator<Item = Result<Position, FailureCode>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
        })
    }
}

impl LocationProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn request(&self, _options: RequestOptions) -> LocationFuture<'_> {
        let next = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FailureCode::PositionUnavailable));
        Box::pin(async move { next })
    }
}

/// Drives one acquisition the way the application does: the state machine
/// issues a request, the provider answers, the answer is fed back.
async fn drive(state: &mut State, provider: &Arc<ScriptedProvider>) {
    let effect = state.handle(Message::AcquireRequested, true);
    let Effect::RequestLocation { token, options } = effect else {
        panic!("expected a location request, got {effect:?}");
    };
    let provider: Arc<dyn LocationProvider> = provider.clone();
    let result = acquire(provider, options).await;
    state.handle(Message::LocationResolved { token, result }, true);
}

#[tokio::test]
async fn locate_then_open_full_list() {
    let nyc = Position::new(40.7128, -74.0060);
    let provider = ScriptedProvider::new([Ok(nyc)]);
    let mut state = State::new(RequestOptions::default());

    drive(&mut state, &provider).await;

    assert_eq!(
        state.view_state(),
        ViewState::Located {
            position: nyc,
            error: None
        }
    );
    assert_eq!(
        state.handle(Message::OpenExternalMapRequested, true),
        Effect::OpenExternal(
            "https://www.google.com/maps/search/homeless+shelter/@40.7128,-74.006,14z".into()
        )
    );
}

#[tokio::test]
async fn refresh_replaces_position_and_failed_refresh_keeps_it() {
    let nyc = Position::new(40.7128, -74.0060);
    let sf = Position::new(37.7749, -122.4194);
    let provider = ScriptedProvider::new([Ok(nyc), Ok(sf), Err(FailureCode::Timeout)]);
    let mut state = State::default();

    drive(&mut state, &provider).await;
    drive(&mut state, &provider).await;
    assert_eq!(state.coordinates(), Some(sf));

    drive(&mut state, &provider).await;
    assert_eq!(
        state.view_state(),
        ViewState::Located {
            position: sf,
            error: Some(GeolocationError::Timeout)
        }
    );
}

#[tokio::test]
async fn denied_permission_shows_message_and_returns_to_idle() {
    let provider = ScriptedProvider::new([Err(FailureCode::PermissionDenied)]);
    let mut state = State::default();

    drive(&mut state, &provider).await;

    let i18n = I18n::new(Some("en-US".into()), &Config::default());
    match state.view_state() {
        ViewState::Idle { error: Some(error) } => {
            assert_eq!(
                i18n.tr(error.i18n_key()),
                "Location permission denied. Please enable location services."
            );
        }
        other => panic!("expected idle with error, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn stalled_provider_resolves_as_timeout() {
    #[derive(Debug)]
    struct Stalled;

    impl LocationProvider for Stalled {
        fn name(&self) -> &'static str {
            "stalled"
        }

        fn request(&self, _options: RequestOptions) -> LocationFuture<'_> {
            Box::pin(std::future::pending::<Result<Position, FailureCode>>())
        }
    }

    let options = RequestOptions {
        timeout: Duration::from_secs(10),
        ..RequestOptions::default()
    };
    let result = acquire(Arc::new(Stalled), options).await;
    assert_eq!(result, Err(FailureCode::Timeout));
}

#[tokio::test]
async fn fixed_provider_from_config_feeds_the_map_urls() {
    let location = LocationConfig {
        provider: ProviderKind::Fixed,
        latitude: Some(48.8566),
        longitude: Some(2.3522),
        ..LocationConfig::default()
    };
    let provider = provider_from_config(&location, ProviderOverrides::default())
        .expect("fixed provider should be built");

    let position = acquire(provider, RequestOptions::default())
        .await
        .expect("fixed provider always succeeds");

    assert_eq!(
        embed_url(&position),
        "https://maps.google.com/maps?q=homeless+shelters+48.8566,2.3522&t=&z=13&ie=UTF8&iwloc=&output=embed"
    );
    assert_eq!(
        external_url(&position),
        "https://www.google.com/maps/search/homeless+shelter/@48.8566,2.3522,14z"
    );
}

#[test]
fn missing_capability_never_loads() {
    let location = LocationConfig {
        provider: ProviderKind::None,
        ..LocationConfig::default()
    };
    let provider = provider_from_config(&location, ProviderOverrides::default());
    assert!(provider.is_none());

    let mut state = State::default();
    let effect = state.handle(Message::AcquireRequested, provider.is_some());

    assert_eq!(effect, Effect::None);
    assert_eq!(
        state.view_state(),
        ViewState::Idle {
            error: Some(GeolocationError::Unsupported)
        }
    );
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("locator-scan-button"), "Scan for Jobs Nearby");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(loaded_french_config.general.theme_mode, ThemeMode::Dark);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn every_error_has_a_translation_in_each_locale() {
    let errors = [
        GeolocationError::Unsupported,
        GeolocationError::PermissionDenied,
        GeolocationError::PositionUnavailable,
        GeolocationError::Timeout,
        GeolocationError::Unclassified,
    ];

    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.into()), &Config::default());
        for error in errors {
            let text = i18n.tr(error.i18n_key());
            assert!(!text.starts_with("MISSING"), "{lang}: {text}");
        }
    }
}

#[test]
fn english_translations_match_error_display() {
    let i18n = I18n::new(Some("en-US".into()), &Config::default());
    for error in [
        GeolocationError::Unsupported,
        GeolocationError::PermissionDenied,
        GeolocationError::PositionUnavailable,
        GeolocationError::Timeout,
        GeolocationError::Unclassified,
    ] {
        assert_eq!(i18n.tr(error.i18n_key()), error.to_string());
    }
}

/// Renderer that paints the whole window in a colour derived from the
/// position, so rasters of different places never match.
#[derive(Debug)]
struct PaintedRenderer;

impl MapRenderer for PaintedRenderer {
    fn name(&self) -> &'static str {
        "painted"
    }

    fn render(&self, window: TileWindow) -> MapFuture<'_> {
        let shade = (window.tiles()[0].coord.x % 251) as u8;
        let image = MapImage {
            width: window.width(),
            height: window.height(),
            pixels: [shade, shade, shade, 255].repeat((window.width() * window.height()) as usize),
        };
        Box::pin(async move { Ok(image) })
    }
}

#[tokio::test]
async fn located_state_shows_a_raster_of_the_area() {
    let nyc = Position::new(40.7128, -74.0060);
    let paris = Position::new(48.8566, 2.3522);
    let provider = ScriptedProvider::new([Ok(nyc), Ok(paris)]);
    let options = RenderOptions {
        zoom: 13,
        width: 8,
        height: 8,
        timeout: Duration::from_secs(5),
    };

    let mut state = State::default();
    let mut rasters = Vec::new();
    for _ in 0..2 {
        let effect = state.handle(Message::AcquireRequested, true);
        let Effect::RequestLocation { token, options: request } = effect else {
            panic!("expected a location request, got {effect:?}");
        };
        let located: Arc<dyn LocationProvider> = provider.clone();
        let result = acquire(located, request).await;

        let Effect::RenderMap(position) = state.handle(Message::LocationResolved { token, result }, true)
        else {
            panic!("a new fix must ask for a map");
        };
        let raster = render_area(Arc::new(PaintedRenderer), position, options)
            .await
            .expect("painted renderer always succeeds");
        rasters.push(raster.pixels.clone());

        let result = Ok(image::Handle::from_rgba(raster.width, raster.height, raster.pixels));
        state.handle(Message::MapRendered { position, result }, true);
        assert!(state.map_tiles().is_some());
    }

    assert_ne!(rasters[0], rasters[1]);
}

#[test]
fn theme_toggle_leaves_unreadable_settings_untouched() {
    const BROKEN_SETTINGS: &str = "[general]\n\
        theme_mode = \"sepia\"\n\
        \n\
        [location]\n\
        provider = \"fixed\"\n\
        latitude = 48.8566\n\
        longitude = 2.3522\n";

    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = dir.path().join("settings.toml");
    fs::write(&settings, BROKEN_SETTINGS).expect("Failed to write settings");
    std::env::set_var(paths::ENV_CONFIG_DIR, dir.path());

    let (config, warning) = config::load();
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING_KEY));
    let flags = Flags {
        lang: Some("en-US".into()),
        no_map: true,
        ..Flags::default()
    };
    let (mut application, _) = App::with_config(flags, &config, warning, |_| Ok(()));
    let _ = application.update(app::Message::Navbar(navbar::Message::CycleTheme));

    std::env::remove_var(paths::ENV_CONFIG_DIR);
    assert_eq!(
        fs::read_to_string(&settings).expect("Failed to read settings"),
        BROKEN_SETTINGS
    );
    assert_eq!(application.notice(), Some("notification-config-save-error"));
}

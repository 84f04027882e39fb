// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the locator component, the location
//! provider, the map renderer, localization and persisted preferences. It
//! translates component effects into Iced tasks.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{LocationProvider, MapRenderer, RenderOptions, RequestOptions};
use crate::application::{acquire, render_area};
use crate::config::{self, Config};
use crate::domain::error::FailureCode;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{
    launcher, provider_from_config, renderer_from_config, ProviderOverrides,
};
use crate::ui::locator::{self, Effect};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Opens a URL outside the application.
pub type Launcher = fn(&str) -> crate::error::Result<()>;

/// i18n key of the notice shown when the browser could not be started.
const LAUNCH_WARNING_KEY: &str = "notification-launch-error";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    locator: locator::State,
    /// `None` when the platform has no location capability.
    provider: Option<Arc<dyn LocationProvider>>,
    /// `None` when map tiles are disabled.
    renderer: Option<Arc<dyn MapRenderer>>,
    theme_mode: ThemeMode,
    /// i18n key of a notice shown under the navbar.
    notice: Option<String>,
    launcher: Launcher,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .field("renderer", &self.renderer.as_ref().map(|r| r.name()))
            .field("locator", &self.locator.view_state())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Request options used for every acquisition.
fn acquisition_options() -> RequestOptions {
    RequestOptions {
        high_accuracy: config::ACQUISITION_HIGH_ACCURACY,
        timeout: Duration::from_secs(config::ACQUISITION_TIMEOUT_SECS),
        maximum_age: Duration::from_secs(config::ACQUISITION_MAXIMUM_AGE_SECS),
    }
}

/// Size and deadline of the map raster.
fn render_options() -> RenderOptions {
    RenderOptions {
        zoom: config::MAP_TILE_ZOOM,
        width: config::MAP_RENDER_WIDTH,
        height: config::MAP_RENDER_HEIGHT,
        timeout: Duration::from_secs(config::MAP_RENDER_TIMEOUT_SECS),
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the CLI flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning, launcher::open_in_browser)
    }

    /// Builds the application from an already loaded config.
    ///
    /// Starts an acquisition right away when auto-locate is enabled by the
    /// flags or the config.
    pub fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
        launcher: Launcher,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let provider = provider_from_config(
            &config.location,
            ProviderOverrides {
                fixed_position: flags.fixed_position,
                disabled: flags.no_geolocation,
            },
        );
        let renderer = renderer_from_config(&config.map, flags.no_map);

        let mut app = App {
            i18n,
            locator: locator::State::new(acquisition_options()),
            provider,
            renderer,
            theme_mode: config.general.theme_mode,
            notice: config_warning,
            launcher,
        };

        let auto_locate = flags.auto_locate
            || config
                .location
                .auto_locate
                .unwrap_or(config::DEFAULT_AUTO_LOCATE);

        let task = if auto_locate {
            tracing::info!("auto-locate enabled; requesting location at startup");
            app.update(Message::Locator(locator::Message::AcquireRequested))
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.locator.is_loading())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Locator(locator_message) => {
                let effect = self
                    .locator
                    .handle(locator_message, self.provider.is_some());
                self.run_effect(effect)
            }
            Message::Navbar(navbar_message) => {
                match navbar::update(navbar_message, self.theme_mode) {
                    NavbarEvent::ThemeModeChanged(mode) => {
                        self.theme_mode = mode;
                        if let Some(key) = persistence::persist_theme_mode(mode) {
                            self.notice = Some(key);
                        }
                    }
                }
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::RequestLocation { token, options } => {
                let resolved = move |result| {
                    Message::Locator(locator::Message::LocationResolved { token, result })
                };
                match &self.provider {
                    Some(provider) => {
                        Task::perform(acquire(Arc::clone(provider), options), resolved)
                    }
                    None => Task::done(resolved(Err(FailureCode::PositionUnavailable))),
                }
            }
            Effect::RenderMap(position) => match &self.renderer {
                Some(renderer) => Task::perform(
                    render_area(Arc::clone(renderer), position, render_options()),
                    move |result| {
                        let result = result.map(|raster| {
                            image::Handle::from_rgba(raster.width, raster.height, raster.pixels)
                        });
                        Message::Locator(locator::Message::MapRendered { position, result })
                    },
                ),
                None => Task::none(),
            },
            Effect::OpenExternal(url) => {
                if let Err(error) = (self.launcher)(&url) {
                    tracing::warn!(%error, url, "could not open external map");
                    self.notice = Some(LAUNCH_WARNING_KEY.to_string());
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let colors = ColorScheme::for_dark(self.theme_mode.is_dark());
        view::view(view::ViewContext {
            i18n: &self.i18n,
            locator: &self.locator,
            theme_mode: self.theme_mode,
            colors,
            notice: self.notice.as_deref(),
        })
    }

    #[must_use]
    pub fn locator(&self) -> &locator::State {
        &self.locator
    }

    #[must_use]
    pub fn has_location_capability(&self) -> bool {
        self.provider.is_some()
    }

    #[must_use]
    pub fn has_map_tiles(&self) -> bool {
        self.renderer.is_some()
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

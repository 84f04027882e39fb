// SPDX-License-Identifier: MPL-2.0
//! Location provider adapters and their selection from configuration.
//!
//! # Selection Order
//!
//! 1. `--no-geolocation` or `provider = "none"`: no capability at all
//! 2. `allow = false`: every request is refused ([`DeniedProvider`])
//! 3. `--lat/--lng`: fixed position from the command line
//! 4. The configured provider (`ip-lookup` or `fixed`)

mod denied;
mod fixed;
mod ip_lookup;

pub use denied::DeniedProvider;
pub use fixed::FixedProvider;
pub use ip_lookup::{parse_lookup_body, IpLookupProvider, DEFAULT_IP_LOOKUP_ENDPOINT};

use crate::application::port::LocationProvider;
use crate::config::{LocationConfig, ProviderKind};
use crate::domain::geo::Position;
use std::sync::Arc;

/// Command line adjustments applied on top of the `[location]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProviderOverrides {
    /// Use this position instead of any configured provider.
    pub fixed_position: Option<Position>,
    /// Pretend the platform has no location capability.
    pub disabled: bool,
}

/// Builds the location capability described by `config`.
///
/// Returns `None` when no capability is available; the UI then reports
/// geolocation as unsupported without ever entering the loading state.
pub fn provider_from_config(
    config: &LocationConfig,
    overrides: ProviderOverrides,
) -> Option<Arc<dyn LocationProvider>> {
    if overrides.disabled || config.provider == ProviderKind::None {
        tracing::info!("geolocation disabled; no location provider");
        return None;
    }

    if !config.allow.unwrap_or(true) {
        tracing::info!("location access not allowed in settings; requests will be refused");
        return Some(Arc::new(DeniedProvider));
    }

    if let Some(position) = overrides.fixed_position {
        tracing::info!(%position, "using fixed position from command line");
        return Some(Arc::new(FixedProvider::new(position)));
    }

    match config.provider {
        ProviderKind::Fixed => match config.fixed_position() {
            Some(Ok(position)) => {
                tracing::info!(%position, "using fixed position from settings");
                Some(Arc::new(FixedProvider::new(position)))
            }
            Some(Err(err)) => {
                tracing::warn!(error = %err, "invalid fixed position in settings");
                None
            }
            None => {
                tracing::warn!("fixed provider selected without latitude/longitude");
                None
            }
        },
        ProviderKind::IpLookup => {
            let endpoint = config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_IP_LOOKUP_ENDPOINT.to_string());
            match IpLookupProvider::new(endpoint) {
                Ok(provider) => {
                    tracing::info!(endpoint = provider.endpoint(), "using ip lookup provider");
                    Some(Arc::new(provider))
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to build ip lookup client");
                    None
                }
            }
        }
        ProviderKind::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(provider: ProviderKind) -> LocationConfig {
        LocationConfig {
            provider,
            ..LocationConfig::default()
        }
    }

    #[test]
    fn none_provider_means_no_capability() {
        let config = location(ProviderKind::None);
        assert!(provider_from_config(&config, ProviderOverrides::default()).is_none());
    }

    #[test]
    fn disabled_override_wins_over_fixed_position() {
        let config = location(ProviderKind::IpLookup);
        let overrides = ProviderOverrides {
            fixed_position: Some(Position::new(1.0, 2.0)),
            disabled: true,
        };
        assert!(provider_from_config(&config, overrides).is_none());
    }

    #[test]
    fn disallowed_location_uses_denied_provider() {
        let config = LocationConfig {
            allow: Some(false),
            ..location(ProviderKind::IpLookup)
        };
        let provider = provider_from_config(&config, ProviderOverrides::default())
            .expect("denied provider expected");
        assert_eq!(provider.name(), "denied");
    }

    #[test]
    fn command_line_position_selects_fixed_provider() {
        let config = location(ProviderKind::IpLookup);
        let overrides = ProviderOverrides {
            fixed_position: Some(Position::new(1.0, 2.0)),
            disabled: false,
        };
        let provider = provider_from_config(&config, overrides).expect("fixed provider expected");
        assert_eq!(provider.name(), "fixed");
    }

    #[test]
    fn fixed_provider_without_coordinates_is_unavailable() {
        let config = location(ProviderKind::Fixed);
        assert!(provider_from_config(&config, ProviderOverrides::default()).is_none());
    }

    #[test]
    fn fixed_provider_with_invalid_coordinates_is_unavailable() {
        let config = LocationConfig {
            latitude: Some(120.0),
            longitude: Some(0.0),
            ..location(ProviderKind::Fixed)
        };
        assert!(provider_from_config(&config, ProviderOverrides::default()).is_none());
    }

    #[test]
    fn fixed_provider_from_settings() {
        let config = LocationConfig {
            latitude: Some(52.52),
            longitude: Some(13.405),
            ..location(ProviderKind::Fixed)
        };
        let provider = provider_from_config(&config, ProviderOverrides::default())
            .expect("fixed provider expected");
        assert_eq!(provider.name(), "fixed");
    }

    #[test]
    fn ip_lookup_is_the_default() {
        let provider = provider_from_config(&LocationConfig::default(), ProviderOverrides::default())
            .expect("ip lookup provider expected");
        assert_eq!(provider.name(), "ip-lookup");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Approximate location from the public IP address.
//!
//! Talks to an ip-api compatible JSON endpoint:
//!
//! ```text
//! {"status":"success","lat":40.7128,"lon":-74.006}
//! {"status":"fail","message":"reserved range"}
//! ```
//!
//! The fix is city-level at best, so `high_accuracy` cannot be honoured;
//! it is accepted and logged.

use crate::application::port::{LocationFuture, LocationProvider, RequestOptions};
use crate::domain::error::FailureCode;
use crate::domain::geo::Position;
use serde::Deserialize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Endpoint used when the settings do not name one.
pub const DEFAULT_IP_LOOKUP_ENDPOINT: &str = "http://ip-api.com/json/?fields=status,message,lat,lon";

/// Code reported when the response body is not the expected JSON.
const MALFORMED_RESPONSE_CODE: u16 = 0;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct CachedFix {
    position: Position,
    acquired_at: Instant,
}

/// Location provider backed by an HTTP IP geolocation service.
#[derive(Debug)]
pub struct IpLookupProvider {
    client: reqwest::Client,
    endpoint: String,
    last_fix: Mutex<Option<CachedFix>>,
}

impl IpLookupProvider {
    /// Creates a provider for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            last_fix: Mutex::new(None),
        })
    }

    /// Returns the endpoint this provider queries.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the last fix if it is younger than `maximum_age`.
    fn cached(&self, maximum_age: Duration) -> Option<Position> {
        if maximum_age.is_zero() {
            return None;
        }
        let guard = self.last_fix.lock().ok()?;
        (*guard)
            .filter(|fix| fix.acquired_at.elapsed() <= maximum_age)
            .map(|fix| fix.position)
    }

    fn remember(&self, position: Position) {
        if let Ok(mut guard) = self.last_fix.lock() {
            *guard = Some(CachedFix {
                position,
                acquired_at: Instant::now(),
            });
        }
    }

    async fn lookup(&self, timeout: Duration) -> Result<Position, FailureCode> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(timeout)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "ip lookup returned an error status");
            return Err(FailureCode::PositionUnavailable);
        }

        let body = response.text().await.map_err(classify_transport_error)?;
        parse_lookup_body(&body)
    }
}

impl LocationProvider for IpLookupProvider {
    fn name(&self) -> &'static str {
        "ip-lookup"
    }

    fn request(&self, options: RequestOptions) -> LocationFuture<'_> {
        Box::pin(async move {
            if let Some(position) = self.cached(options.maximum_age) {
                tracing::debug!(%position, "reusing cached ip lookup fix");
                return Ok(position);
            }
            if options.high_accuracy {
                tracing::debug!("high accuracy requested; ip lookup is city-level");
            }

            let position = self.lookup(options.timeout).await?;
            self.remember(position);
            Ok(position)
        })
    }
}

/// Parses an ip-api style response body into a position.
pub fn parse_lookup_body(body: &str) -> Result<Position, FailureCode> {
    let response: LookupResponse = serde_json::from_str(body).map_err(|err| {
        tracing::warn!(error = %err, "malformed ip lookup response");
        FailureCode::Unknown(MALFORMED_RESPONSE_CODE)
    })?;

    if response.status != "success" {
        tracing::warn!(
            status = %response.status,
            message = response.message.as_deref().unwrap_or(""),
            "ip lookup could not locate this address"
        );
        return Err(FailureCode::PositionUnavailable);
    }

    let (Some(lat), Some(lon)) = (response.lat, response.lon) else {
        return Err(FailureCode::PositionUnavailable);
    };

    Position::validated(lat, lon).map_err(|err| {
        tracing::warn!(error = %err, "ip lookup returned an impossible position");
        FailureCode::PositionUnavailable
    })
}

fn classify_transport_error(err: reqwest::Error) -> FailureCode {
    if err.is_timeout() {
        FailureCode::Timeout
    } else {
        tracing::warn!(error = %err, "ip lookup request failed");
        FailureCode::PositionUnavailable
    }
}

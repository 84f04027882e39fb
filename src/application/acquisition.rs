// SPDX-License-Identifier: MPL-2.0
//! Location acquisition use case.

use crate::application::port::{LocationProvider, RequestOptions};
use crate::domain::error::FailureCode;
use crate::domain::geo::Position;
use std::sync::Arc;
use std::time::Instant;

/// Runs one request against `provider`, enforcing `options.timeout`.
///
/// Providers are free to honour the timeout themselves; this wrapper makes
/// sure a stalled provider still resolves with [`FailureCode::Timeout`].
pub async fn acquire(
    provider: Arc<dyn LocationProvider>,
    options: RequestOptions,
) -> Result<Position, FailureCode> {
    let started = Instant::now();
    tracing::debug!(
        provider = provider.name(),
        high_accuracy = options.high_accuracy,
        timeout_ms = options.timeout.as_millis() as u64,
        maximum_age_ms = options.maximum_age.as_millis() as u64,
        "requesting location"
    );

    let outcome = match tokio::time::timeout(options.timeout, provider.request(options)).await {
        Ok(result) => result,
        Err(_elapsed) => Err(FailureCode::Timeout),
    };

    let elapsed_ms = started.elapsed().as_millis() as u64;
    match &outcome {
        Ok(position) => tracing::info!(
            provider = provider.name(),
            elapsed_ms,
            latitude = position.latitude(),
            longitude = position.longitude(),
            "location acquired"
        ),
        Err(code) => tracing::warn!(
            provider = provider.name(),
            elapsed_ms,
            code = code.code(),
            failure = %code,
            "location request failed"
        ),
    }
    outcome
}

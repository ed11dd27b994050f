//! HTTP plumbing shared by the REST-backed providers.

use std::time::Duration;

use anyhow::{Context, Result};

use pantheon_core::error::ProviderError;

/// Fallback wait when a 429 carries no usable `retry-after` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 5;

pub(crate) fn build_client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("failed to build HTTP client")
}

/// Map a transport failure to a provider error.
pub(crate) fn transport_error(e: reqwest::Error, timeout_secs: u64) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout(timeout_secs)
    } else {
        ProviderError::NetworkError(e.to_string())
    }
}

/// Turn error statuses into provider errors; pass successful responses
/// through untouched.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status().as_u16();
    if status < 400 {
        return Ok(response);
    }

    if status == 429 {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
            .saturating_mul(1000);
        return Err(ProviderError::RateLimited {
            retry_after_ms: retry_after,
        });
    }

    let body = response.text().await.unwrap_or_default();
    Err(match status {
        401 | 403 => ProviderError::AuthenticationFailed(body),
        404 => ProviderError::ModelNotFound(body),
        _ => ProviderError::ApiError {
            status,
            message: body,
        },
    })
}

/// Decode a JSON body, reporting malformed payloads as API errors.
pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    response.json().await.map_err(|e| ProviderError::ApiError {
        status: 0,
        message: format!("failed to parse response: {e}"),
    })
}

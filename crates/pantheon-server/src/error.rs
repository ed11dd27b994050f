use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Machine-readable error codes carried in [`ApiError::error`].
pub mod codes {
    pub const INVALID_REQUEST: &str = "invalid_request";
    pub const GENERATION_FAILED: &str = "generation_failed";
}

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

/// Handler error that converts to a structured API response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or out-of-domain request body (400).
    #[error("{0}")]
    Validation(String),
    /// The generation backend failed or timed out (502).
    #[error("generation failed: {0:#}")]
    Generation(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, api_error) = match self {
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    error: codes::INVALID_REQUEST.to_string(),
                    message,
                },
            ),
            AppError::Generation(err) => {
                tracing::error!("generation failed: {err:#}");
                (
                    StatusCode::BAD_GATEWAY,
                    ApiError {
                        error: codes::GENERATION_FAILED.to_string(),
                        message: "The question generator did not respond. Try again later."
                            .to_string(),
                    },
                )
            }
        };

        (status, Json(api_error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = AppError::Validation("bad".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn generation_maps_to_bad_gateway() {
        let response = AppError::Generation(anyhow::anyhow!("timeout")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}

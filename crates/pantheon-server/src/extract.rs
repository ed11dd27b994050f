//! JSON extractor that reports rejections as structured `AppError`s.
//!
//! Use `AppJson<T>` in place of `axum::Json<T>`: a body that fails to
//! deserialize produces a 400 `invalid_request` JSON error instead of
//! axum's plain-text rejection.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::error::AppError;

pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(map_json_rejection(rejection)),
        }
    }
}

pub fn map_json_rejection(rejection: JsonRejection) -> AppError {
    AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
}

use crate::catalog::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures reported by the JSON API, each one maps to a status code and an
/// `{"error": "..."}` body.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid json")]
    InvalidJson,
    #[error("invalid id")]
    InvalidId,
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("invalid path")]
    InvalidPath,
    #[error("upstream unavailable")]
    Upstream,
    #[error("no id available")]
    IdsExhausted,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::InvalidId | ApiError::InvalidPath => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Upstream => StatusCode::BAD_GATEWAY,
            ApiError::IdsExhausted => StatusCode::INSUFFICIENT_STORAGE,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::IdsExhausted => ApiError::IdsExhausted,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

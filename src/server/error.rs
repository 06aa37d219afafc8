//! HTTP error responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::{CacheError, Error};

/// JSON error body: `{"error": CODE, "message": ...}`
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    #[serde(rename = "error")]
    pub code: &'static str,
    pub message: String,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let (status, code) = match &err {
            Error::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            Error::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            Error::Validation(_) => (StatusCode::BAD_GATEWAY, "VALIDATION_ERROR"),
            Error::Cache(CacheError::Duplicate { .. }) => (StatusCode::CONFLICT, "DUPLICATE_ENTRY"),
            Error::Cache(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CACHE_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        if status.is_server_error() || status == StatusCode::CONFLICT {
            log::warn!("{} {}: {}", status.as_u16(), code, err);
        } else {
            log::debug!("{} {}: {}", status.as_u16(), code, err);
        }

        Self {
            status,
            code,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use estia_core::auth::AuthError;
use estia_core::storage::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable kind.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Application-level errors with HTTP status mapping.
///
/// A closed enum: the `IntoResponse` impl matches exhaustively, so every
/// kind is guaranteed a response mapping at compile time.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            ApiError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            ApiError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "unauthorized", m.as_str()),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.as_str()),
            ApiError::Conflict(m) => (StatusCode::CONFLICT, "conflict", m.as_str()),
            ApiError::UnsupportedMedia(m) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_media",
                m.as_str(),
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => ApiError::NotFound("row not found".into()),
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Db(e) => ApiError::from(e),
            AuthError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::UnsupportedFormat => ApiError::UnsupportedMedia(e.to_string()),
            StorageError::Io(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_kinds() {
        assert_eq!(
            StatusCode::BAD_REQUEST,
            ApiError::Validation("x".into()).into_response().status()
        );
        assert_eq!(
            StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized("x".into()).into_response().status()
        );
        assert_eq!(
            StatusCode::CONFLICT,
            ApiError::Conflict("x".into()).into_response().status()
        );
        assert_eq!(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::UnsupportedMedia("x".into())
                .into_response()
                .status()
        );
    }

    #[test]
    fn internal_errors_never_echo_their_cause() {
        let resp = ApiError::Internal("connection string with password".into()).into_response();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, resp.status());
    }

    #[test]
    fn missing_row_maps_to_not_found() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}

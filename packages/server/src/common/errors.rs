//! Request-level error taxonomy and HTTP status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients.
///
/// Each variant carries its canonical HTTP status; handlers never pick
/// status codes ad hoc.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or missing client input. Rejected before any side effect.
    #[error("{0}")]
    Validation(String),

    /// Missing, invalid, or expired credential token.
    #[error("User not authenticated")]
    Unauthenticated,

    /// Signin against an unknown account.
    #[error("User not found")]
    UserNotFound,

    /// Signin with a password that does not match the stored hash.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Uniqueness violation on create.
    #[error("{0}")]
    Conflict(String),

    /// Referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Unclassified persistence or codec failure.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Canonical status mapping.
    ///
    /// 411 for invalid input and 401 for signup conflicts are kept for
    /// compatibility with existing API clients.
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::LENGTH_REQUIRED,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::UserNotFound => StatusCode::FORBIDDEN,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal failures are logged in full; clients get a generic body.
        let message = match &self {
            ApiError::Internal(source) => {
                tracing::error!(error = %source, "request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_411() {
        let err = ApiError::Validation("title is required".to_string());
        assert_eq!(err.status_code(), StatusCode::LENGTH_REQUIRED);
    }

    #[test]
    fn test_auth_failures_map_to_401() {
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_user_not_found_maps_to_403() {
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::NotFound("Post not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_hides_source_message() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

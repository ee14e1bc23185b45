//! Error types and Axum response conversions.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::store::StoreError;

/// Application error types.
///
/// Low-level failures (KDF errors, token parsing, store errors) are caught at
/// the auth/store boundary and re-thrown as one of these kinds with a
/// sanitized user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Internal(msg) => {
                // Log detailed error server-side, return generic message to client
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::ValidationFailed(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Translate store failures into domain errors.
///
/// A violated unique constraint on the user email becomes a validation error
/// with a user-facing message; anything else is an internal error whose detail
/// stays in the server log.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { constraint } => {
                if constraint.contains("user_email") {
                    AppError::ValidationFailed(
                        "There is already a user with this email address".to_string(),
                    )
                } else {
                    AppError::ValidationFailed("This item already exists".to_string())
                }
            }
            StoreError::Backend(msg) => AppError::Internal(format!("Store error: {}", msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    /// Extract status code and JSON body from an AppError response.
    async fn error_response(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        // CRITICAL: Internal error must NOT leak detailed message to client
        let (status, body) = error_response(AppError::Internal(
            "argon2 params rejected at startup".to_string(),
        ))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        // Must NOT contain the actual error details
        assert!(!body["error"].as_str().unwrap().contains("argon2"));
    }

    #[tokio::test]
    async fn test_validation_failed() {
        let (status, body) =
            error_response(AppError::ValidationFailed("Invalid email".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email");
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let (status, body) =
            error_response(AppError::Unauthorized("You need to be signed in".to_string())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "You need to be signed in");
    }

    #[tokio::test]
    async fn test_forbidden() {
        let (status, body) = error_response(AppError::Forbidden(
            "You are not allowed to view this part of the application".to_string(),
        ))
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            body["error"],
            "You are not allowed to view this part of the application"
        );
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) =
            error_response(AppError::NotFound("No user with this id exists".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No user with this id exists");
    }

    #[test]
    fn test_from_duplicate_email() {
        let err = AppError::from(StoreError::Duplicate {
            constraint: "idx_user_email_unique",
        });
        match err {
            AppError::ValidationFailed(msg) => {
                assert_eq!(msg, "There is already a user with this email address");
            }
            _ => panic!("Expected ValidationFailed variant"),
        }
    }

    #[test]
    fn test_from_other_duplicate() {
        let err = AppError::from(StoreError::Duplicate {
            constraint: "idx_team_name_unique",
        });
        match err {
            AppError::ValidationFailed(msg) => assert_eq!(msg, "This item already exists"),
            _ => panic!("Expected ValidationFailed variant"),
        }
    }

    #[test]
    fn test_from_backend_error() {
        let err = AppError::from(StoreError::Backend("connection refused".to_string()));
        match err {
            AppError::Internal(msg) => assert!(msg.contains("Store error")),
            _ => panic!("Expected Internal variant"),
        }
    }
}

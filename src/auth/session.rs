//! Bearer-header session resolution.

use crate::config::JwtConfig;
use crate::error::AppError;
use crate::models::Role;

use super::token::{verify_token, TokenError};

/// Resolved session for the current request.
///
/// Created fresh per request from a verified token and dropped when request
/// handling ends; never persisted or shared across requests.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: u64,
    pub roles: Vec<Role>,
}

/// Resolve an optional `Authorization` header into a session.
///
/// The caller receives only sanitized messages; the underlying verification
/// detail is written to the server log.
pub fn resolve_session(
    auth_header: Option<&str>,
    config: &JwtConfig,
) -> Result<Session, AppError> {
    let auth_header = auth_header
        .ok_or_else(|| AppError::Unauthorized("You need to be signed in".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authentication token".to_string()))?;

    match verify_token(token, config) {
        Ok((user_id, roles)) => Ok(Session { user_id, roles }),
        Err(TokenError::Expired) => {
            tracing::warn!(action = "session_rejected", error = "jwt expired");
            Err(AppError::Unauthorized("The token has expired".to_string()))
        }
        Err(TokenError::Invalid(detail)) => {
            tracing::warn!(action = "session_rejected", error = %detail);
            Err(AppError::Unauthorized(format!(
                "Invalid authentication token: {}",
                detail
            )))
        }
    }
}

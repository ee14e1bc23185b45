//! Session (login) endpoint.

use axum::{extract::State, response::IntoResponse, Json};

use crate::auth::delay::auth_delay;
use crate::auth::middleware::AppState;
use crate::auth::{password, token};
use crate::error::AppError;
use crate::models::{LoginRequest, TokenResponse};
use crate::routes::valid_email;

/// Single failure message for both "no such user" and "wrong password", so
/// the response reveals nothing about which one happened.
pub const LOGIN_FAILED: &str = "The given email and password do not match";

/// POST /api/sessions — Log in with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Runs unconditionally, before any account lookup
    auth_delay(state.config.auth_max_delay_ms).await;

    if !valid_email(&req.email) {
        return Err(AppError::ValidationFailed(
            "Please provide a valid email address".to_string(),
        ));
    }

    let user = state
        .store
        .user_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(LOGIN_FAILED.to_string()))?;

    let password_valid = password::verify_password(&req.password, &user.password_hash)?;
    if !password_valid {
        tracing::warn!(action = "login_failed", user_id = user.id, "Password mismatch");
        return Err(AppError::Unauthorized(LOGIN_FAILED.to_string()));
    }

    let token = token::issue_token(user.id, &user.roles, &state.config.jwt)?;

    tracing::info!(action = "login", user_id = user.id, "User logged in");

    Ok(Json(TokenResponse { token }))
}

//! User endpoints: registration, listing, and lookup by id.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::auth::authorize::{check_user_id, UserIdParam};
use crate::auth::delay::auth_delay;
use crate::auth::middleware::{AdminSession, AppState, AuthSession};
use crate::auth::{password, token};
use crate::error::AppError;
use crate::models::{
    NewUser, PublicUser, RegisterRequest, Role, TokenResponse, UserListResponse,
};
use crate::routes::valid_email;

/// POST /api/users — Register a new account
///
/// Returns a session token for the new user, so registration doubles as the
/// first login.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Runs unconditionally, before the duplicate-email check
    auth_delay(state.config.auth_max_delay_ms).await;

    if req.name.is_empty() || req.name.len() > 255 {
        return Err(AppError::ValidationFailed(
            "Name must be between 1 and 255 characters".to_string(),
        ));
    }
    if !valid_email(&req.email) {
        return Err(AppError::ValidationFailed(
            "Please provide a valid email address".to_string(),
        ));
    }
    if req.password.len() < 12 || req.password.len() > 128 {
        return Err(AppError::ValidationFailed(
            "Password must be between 12 and 128 characters".to_string(),
        ));
    }

    let password_hash = password::hash_password(&req.password, &state.config.argon)?;

    // A duplicate email surfaces as a validation error via the store
    // translation, never as a raw backend error
    let user = state
        .store
        .create_user(NewUser {
            name: req.name,
            email: req.email,
            password_hash,
            roles: vec![Role::User],
        })
        .await?;

    let token = token::issue_token(user.id, &user.roles, &state.config.jwt)?;

    tracing::info!(action = "user_registered", user_id = user.id, "New user registered");

    Ok(Json(TokenResponse { token }))
}

/// GET /api/users — List all users (admin only)
pub async fn get_all_users(
    AdminSession(_session): AdminSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.store.list_users().await?;

    Ok(Json(UserListResponse {
        items: users.into_iter().map(PublicUser::from).collect(),
    }))
}

/// GET /api/users/{id} — Get a user by id
///
/// `me` refers to the authenticated user. A user can only view their own
/// data unless they hold the admin role.
pub async fn get_user_by_id(
    AuthSession(session): AuthSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let param = id
        .parse::<UserIdParam>()
        .map_err(AppError::ValidationFailed)?;

    check_user_id(param, &session)?;

    let user = state
        .store
        .user_by_id(param.resolve(&session))
        .await?
        .ok_or_else(|| AppError::NotFound("No user with this id exists".to_string()))?;

    Ok(Json(PublicUser::from(user)))
}

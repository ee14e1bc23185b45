//! Axum extractors for authentication and role checks.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};

use crate::config::Config;
use crate::error::AppError;
use crate::models::Role;
use crate::store::UserStore;

use super::authorize::check_role;
use super::session::{resolve_session, Session};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub config: Arc<Config>,
}

/// Authenticated session extractor.
///
/// Resolves the session from `Authorization: Bearer {token}`.
/// Returns 401 Unauthorized if missing or invalid.
pub struct AuthSession(pub Session);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let session = resolve_session(auth_header, &state.config.jwt)?;

        Ok(AuthSession(session))
    }
}

/// Admin-only session extractor.
///
/// Extracts the session and requires the admin role.
/// Returns 403 Forbidden otherwise.
pub struct AdminSession(pub Session);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthSession(session) = AuthSession::from_request_parts(parts, state).await?;

        check_role(Role::Admin, &session.roles)?;

        Ok(AdminSession(session))
    }
}

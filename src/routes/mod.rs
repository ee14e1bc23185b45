//! API route handlers.

pub mod health;
pub mod session;
pub mod user;

use axum::{routing::get, routing::post, Router};

use crate::auth::middleware::AppState;

/// Loose email shape check: one `@` with a non-empty local part and a
/// domain containing a dot. Full RFC validation is not the goal.
pub fn valid_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.len() >= 3
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Build the API router with all endpoints.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Health endpoints
        .route("/api/health/ping", get(health::ping))
        .route("/api/health/version", get(health::version))
        // Session endpoints
        .route("/api/sessions", post(session::login))
        // User endpoints
        .route(
            "/api/users",
            post(user::register).get(user::get_all_users),
        )
        .route("/api/users/{id}", get(user::get_user_by_id))
}

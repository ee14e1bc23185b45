//! Playerlineup backend entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Seed the admin account
//! 3. Build router with API routes
//! 4. Apply CORS + security headers middleware
//! 5. Start Axum server

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use playerlineup::{
    auth::middleware::AppState,
    auth::password,
    config::Config,
    middleware::security_headers,
    models::{NewUser, Role},
    routes,
    store::{MemoryStore, UserStore},
};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() {
    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config from environment
    let config = Config::from_env().expect("Failed to load config");
    tracing::info!("Starting playerlineup on {}", config.bind_addr);

    let store: Arc<dyn UserStore> = Arc::new(MemoryStore::new());

    // Seed admin user so the role guards work on a fresh deployment
    let password_hash = password::hash_password(&config.admin_password, &config.argon)
        .expect("Failed to hash admin password");

    store
        .create_user(NewUser {
            name: config.admin_name.clone(),
            email: config.admin_email.clone(),
            password_hash,
            roles: vec![Role::Admin, Role::User],
        })
        .await
        .expect("Failed to seed admin user");
    tracing::info!("Admin user '{}' configured", config.admin_email);

    // CORS: explicit allow-list of frontend origins from config
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .map(|o| o.parse().expect("Invalid CORS origin"))
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    let bind_addr = config.bind_addr;

    // Build shared state
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let app = routes::api_router()
        .layer(cors)
        .layer(axum::middleware::from_fn(security_headers))
        .with_state(state);

    // Bind to configured address
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}

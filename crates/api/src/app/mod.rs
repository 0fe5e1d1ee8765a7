//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: collaborators shared by handlers
//! - `routes/`: HTTP routes + handlers
//! - `alerts.rs`: `X-{app}-alert` style notification headers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use labofap_auth::Hs256JwtValidator;
use labofap_infra::UserService;

use crate::config::{ApiConfig, ConfigError};
use crate::middleware;

pub mod alerts;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(config: &ApiConfig, users: Arc<dyn UserService>) -> Result<Router, ConfigError> {
    let jwt = Arc::new(Hs256JwtValidator::new(config.jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState { jwt };

    let alerts = alerts::AlertHeaders::new(&config.app_name)
        .map_err(|_| ConfigError::InvalidAppName(config.app_name.clone()))?;
    let services = Arc::new(services::AppServices::new(users, alerts));

    // Protected routes: require a valid bearer token.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", protected))
}

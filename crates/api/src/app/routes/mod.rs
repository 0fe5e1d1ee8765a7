use axum::Router;

pub mod authorities;
pub mod system;

/// Router for all authenticated `/api` endpoints.
pub fn router() -> Router {
    Router::new().merge(authorities::router())
}

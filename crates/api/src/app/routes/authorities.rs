//! Authority management endpoints (admin only).

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use labofap_auth::AuthorityName;

use crate::app::{errors::ApiError, services::AppServices};
use crate::middleware;

pub const ENTITY_NAME: &str = "Authority";
pub const EMPTY_NAME_MESSAGE: &str = "A new Authority cannot be null or empty";
pub const CREATED_ALERT: &str = "authorities.created";

const COLLECTION_PATH: &str = "/api/authorities";

pub fn router() -> Router {
    Router::new()
        .route("/authorities", get(list_authorities).post(create_authority))
        .route("/authorities/:name", get(get_authority))
        .route_layer(axum::middleware::from_fn(middleware::require_admin))
}

/// POST /api/authorities - Register a new authority.
///
/// The body is the raw authority name, optionally as a JSON string literal.
#[tracing::instrument(skip_all)]
pub async fn create_authority(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let body = std::str::from_utf8(&body)
        .map_err(|e| ApiError::InvalidBody(format!("request body is not UTF-8: {e}")))?;

    let requested = name_from_body(body);
    tracing::debug!("REST request to save Authority : {:?}", requested);

    let name = AuthorityName::parse(requested.as_deref())
        .map_err(|_| services.alerts.bad_request(EMPTY_NAME_MESSAGE, ENTITY_NAME, "idexists"))?;

    let authority = services.users.register_authority(&name).await?;

    let location = HeaderValue::from_str(&location_for(&name))
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let mut headers = services.alerts.alert(CREATED_ALERT, name.as_str());
    headers.insert(LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(authority)).into_response())
}

/// GET /api/authorities - All authority names, sorted.
#[tracing::instrument(skip_all)]
pub async fn list_authorities(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(services.users.get_authorities().await?))
}

/// GET /api/authorities/:name - A single authority, matched exactly.
#[tracing::instrument(skip_all)]
pub async fn get_authority(
    Extension(services): Extension<Arc<AppServices>>,
    Path(raw): Path<String>,
) -> Result<Response, ApiError> {
    // Stored names are trimmed, so a padded segment can never match.
    let name = AuthorityName::new(&raw).map_err(|_| ApiError::NotFound)?;
    if name.as_str() != raw {
        return Err(ApiError::NotFound);
    }

    match services.users.find_authority(&name).await? {
        Some(authority) => Ok(Json(authority).into_response()),
        None => Err(ApiError::NotFound),
    }
}

/// Resource path of a single authority; the name is percent-encoded.
fn location_for(name: &AuthorityName) -> String {
    format!("{COLLECTION_PATH}/{}", urlencoding::encode(name.as_str()))
}

/// Interpret a request body as an authority name.
///
/// A blank body is a missing name; a JSON string literal is unwrapped;
/// anything else is taken verbatim.
fn name_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('"') {
        if let Ok(unquoted) = serde_json::from_str::<String>(trimmed) {
            return Some(unquoted);
        }
    }
    Some(body.to_string())
}

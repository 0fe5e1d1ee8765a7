use std::sync::Arc;

use axum::{
    extract::{Extension, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use labofap_auth::{JwtValidator, roles};

use crate::app::errors::ApiError;
use crate::authz;
use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

/// Validates the bearer token and attaches a [`PrincipalContext`].
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())?;

    let claims = state.jwt.validate(token, Utc::now()).map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        ApiError::Unauthorized
    })?;

    req.extensions_mut()
        .insert(PrincipalContext::new(claims.principal()));

    Ok(next.run(req).await)
}

/// Rejects callers without `ROLE_ADMIN` before the handler (and its body
/// extraction) runs.
pub async fn require_admin(
    Extension(principal): Extension<PrincipalContext>,
    req: Request,
    next: Next,
) -> Response {
    match authz::require_role(&principal, &roles::ADMIN) {
        Ok(()) => next.run(req).await,
        Err(e) => {
            tracing::warn!(login = principal.login(), path = %req.uri().path(), "admin access denied");
            ApiError::Forbidden(e.to_string()).into_response()
        }
    }
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(ApiError::Unauthorized)?;

    let header = header.to_str().map_err(|_| ApiError::Unauthorized)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(ApiError::Unauthorized);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, header::AUTHORIZATION};

    use super::*;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        let headers = headers("Bearer abc.def.ghi ");
        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_or_foreign_schemes_are_unauthorized() {
        assert!(matches!(extract_bearer(&HeaderMap::new()), Err(ApiError::Unauthorized)));
        assert!(matches!(
            extract_bearer(&headers("Basic dXNlcjpwYXNz")),
            Err(ApiError::Unauthorized)
        ));
        assert!(matches!(extract_bearer(&headers("Bearer   ")), Err(ApiError::Unauthorized)));
    }
}

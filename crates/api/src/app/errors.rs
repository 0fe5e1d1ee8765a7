use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use labofap_infra::UserServiceError;

/// A 400 carrying a user-facing alert (entity name + translation key).
#[derive(Debug, Clone)]
pub struct BadRequestAlert {
    pub title: String,
    pub entity_name: String,
    pub error_key: String,
    /// `X-{app}-error` / `X-{app}-params` failure alert headers.
    pub headers: HeaderMap,
}

/// Every error an API handler or middleware can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .0.title)]
    BadRequestAlert(Box<BadRequestAlert>),

    #[error("{0}")]
    InvalidBody(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    UserService(#[from] UserServiceError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequestAlert(alert) => {
                let BadRequestAlert {
                    title,
                    entity_name,
                    error_key,
                    headers,
                } = *alert;
                let body = json!({
                    "title": title,
                    "status": StatusCode::BAD_REQUEST.as_u16(),
                    "entityName": entity_name,
                    "errorKey": error_key,
                    "message": format!("error.{error_key}"),
                    "params": entity_name,
                });
                (StatusCode::BAD_REQUEST, headers, axum::Json(body)).into_response()
            }
            ApiError::InvalidBody(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_body", msg),
            ApiError::Unauthorized => {
                json_error(StatusCode::UNAUTHORIZED, "unauthorized", "unauthorized")
            }
            ApiError::Forbidden(msg) => json_error(StatusCode::FORBIDDEN, "forbidden", msg),
            ApiError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
            ApiError::UserService(err) => user_service_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
        }
    }
}

/// Generic translation of collaborator failures.
pub fn user_service_error_to_response(err: UserServiceError) -> Response {
    match err {
        UserServiceError::AlreadyExists(_) => {
            json_error(StatusCode::CONFLICT, "conflict", err.to_string())
        }
        UserServiceError::Store(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_alert_renders_problem_body() {
        let err = ApiError::BadRequestAlert(Box::new(BadRequestAlert {
            title: "A new Authority cannot be null or empty".to_string(),
            entity_name: "Authority".to_string(),
            error_key: "idexists".to_string(),
            headers: HeaderMap::new(),
        }));
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body = body_json(res).await;
        assert_eq!(body["errorKey"], "idexists");
        assert_eq!(body["entityName"], "Authority");
        assert_eq!(body["message"], "error.idexists");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn collaborator_errors_are_translated() {
        let res = ApiError::from(UserServiceError::AlreadyExists("ROLE_X".into())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(res).await["error"], "conflict");

        let res = ApiError::from(UserServiceError::Store("db down".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(res).await["message"], "db down");
    }

    #[tokio::test]
    async fn invalid_body_is_a_json_bad_request() {
        let res = ApiError::InvalidBody("request body is not UTF-8".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["error"], "invalid_body");
    }

    #[test]
    fn auth_errors_map_to_401_and_403() {
        assert_eq!(ApiError::Unauthorized.into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Forbidden("nope".into()).into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}

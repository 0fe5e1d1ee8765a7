//! Alert headers: user-facing notification keys carried in response headers.
//!
//! Success responses get `X-{app}-alert` (message key) and `X-{app}-params`
//! (the subject, percent-encoded). Failures get `X-{app}-error` instead of
//! the alert header.

use axum::http::{HeaderMap, HeaderName, HeaderValue, header::InvalidHeaderName};

use crate::app::errors::{ApiError, BadRequestAlert};

#[derive(Debug, Clone)]
pub struct AlertHeaders {
    alert: HeaderName,
    error: HeaderName,
    params: HeaderName,
}

impl AlertHeaders {
    pub fn new(app_name: &str) -> Result<Self, InvalidHeaderName> {
        let name = |suffix: &str| HeaderName::from_bytes(format!("X-{app_name}-{suffix}").as_bytes());
        Ok(Self {
            alert: name("alert")?,
            error: name("error")?,
            params: name("params")?,
        })
    }

    pub fn alert_name(&self) -> &HeaderName {
        &self.alert
    }

    pub fn error_name(&self) -> &HeaderName {
        &self.error
    }

    pub fn params_name(&self) -> &HeaderName {
        &self.params
    }

    /// Headers announcing a successful change, e.g. `authorities.created`.
    pub fn alert(&self, message: &str, param: &str) -> HeaderMap {
        self.pair(&self.alert, message, param)
    }

    /// Headers for a failed request on `entity_name`.
    pub fn failure(&self, entity_name: &str, error_key: &str) -> HeaderMap {
        self.pair(&self.error, &format!("error.{error_key}"), entity_name)
    }

    /// A 400 error carrying the failure alert headers.
    pub fn bad_request(&self, title: &str, entity_name: &str, error_key: &str) -> ApiError {
        ApiError::BadRequestAlert(Box::new(BadRequestAlert {
            title: title.to_string(),
            entity_name: entity_name.to_string(),
            error_key: error_key.to_string(),
            headers: self.failure(entity_name, error_key),
        }))
    }

    fn pair(&self, key_header: &HeaderName, key: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        // Percent-encoded text is always a valid header value.
        if let Ok(value) = HeaderValue::from_str(&urlencoding::encode(key)) {
            headers.insert(key_header.clone(), value);
        }
        if let Ok(value) = HeaderValue::from_str(&urlencoding::encode(param)) {
            headers.insert(self.params.clone(), value);
        }
        headers
    }
}

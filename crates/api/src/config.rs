//! Process configuration, read from the environment once at start-up.

use std::net::SocketAddr;

use thiserror::Error;

use crate::app::alerts::AlertHeaders;

pub const DEFAULT_JWT_SECRET: &str = "dev-secret";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_APP_NAME: &str = "labofapApp";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BIND_ADDR '{0}' is not a socket address")]
    InvalidBindAddr(String),

    #[error("JWT_SECRET must not be empty")]
    EmptyJwtSecret,

    #[error("APP_NAME '{0}' cannot be used in a header name")]
    InvalidAppName(String),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub jwt_secret: String,
    pub bind_addr: SocketAddr,
    /// Prefix of the alert headers (`X-{app_name}-alert`).
    pub app_name: String,
    /// Postgres connection string; only honoured with the `postgres` feature.
    pub database_url: Option<String>,
}

impl ApiConfig {
    /// Defaults for everything except the token secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            app_name: DEFAULT_APP_NAME.to_string(),
            database_url: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            DEFAULT_JWT_SECRET.to_string()
        });
        if jwt_secret.is_empty() {
            return Err(ConfigError::EmptyJwtSecret);
        }

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.clone()))?;

        let app_name = lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        if AlertHeaders::new(&app_name).is_err() {
            return Err(ConfigError::InvalidAppName(app_name));
        }

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        Ok(Self {
            jwt_secret,
            bind_addr,
            app_name,
            database_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("APP_NAME", "labApp"),
            ("DATABASE_URL", "postgres://localhost/labofap"),
        ]))
        .unwrap();

        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.app_name, "labApp");
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/labofap"));
    }

    #[test]
    fn invalid_values_are_errors() {
        assert_eq!(
            ApiConfig::from_lookup(lookup(&[("BIND_ADDR", "nowhere")])).unwrap_err(),
            ConfigError::InvalidBindAddr("nowhere".to_string())
        );
        assert_eq!(
            ApiConfig::from_lookup(lookup(&[("JWT_SECRET", "")])).unwrap_err(),
            ConfigError::EmptyJwtSecret
        );
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[("APP_NAME", "two words")])),
            Err(ConfigError::InvalidAppName(_))
        ));
    }
}

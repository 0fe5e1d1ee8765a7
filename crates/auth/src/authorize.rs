use thiserror::Error;

use crate::Role;

/// An authenticated caller as seen by authorization decisions.
///
/// Built by the transport layer from validated token claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub login: String,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn new(login: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            login: login.into(),
            roles,
        }
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing role '{0}'")]
    Forbidden(String),
}

/// Authorize a principal against a required role.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(principal: &Principal, required: &Role) -> Result<(), AuthzError> {
    if principal.has_role(required) {
        Ok(())
    } else {
        tracing::debug!(
            login = %principal.login,
            required = %required,
            "authorization denied"
        );
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}

//! User-management collaborator boundary.
//!
//! The HTTP layer only sees [`UserService`]; persistence, caching and
//! uniqueness rules live behind it.

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

use std::sync::Arc;

use thiserror::Error;

use labofap_auth::{Authority, AuthorityName, roles};

pub use in_memory::InMemoryUserService;
#[cfg(feature = "postgres")]
pub use postgres::PostgresUserService;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserServiceError {
    #[error("authority '{0}' already exists")]
    AlreadyExists(String),

    #[error("store error: {0}")]
    Store(String),
}

/// Authorities every fresh store starts with.
pub fn default_authorities() -> Vec<AuthorityName> {
    [roles::ADMIN, roles::USER]
        .iter()
        .filter_map(|role| AuthorityName::new(role.as_str()).ok())
        .collect()
}

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Persist a new authority and return the stored record.
    ///
    /// Fails with [`UserServiceError::AlreadyExists`] when the name is taken.
    async fn register_authority(&self, name: &AuthorityName) -> Result<Authority, UserServiceError>;

    /// All authority names, sorted.
    async fn get_authorities(&self) -> Result<Vec<String>, UserServiceError>;

    async fn find_authority(
        &self,
        name: &AuthorityName,
    ) -> Result<Option<Authority>, UserServiceError>;
}

#[async_trait::async_trait]
impl<S> UserService for Arc<S>
where
    S: UserService + ?Sized,
{
    async fn register_authority(&self, name: &AuthorityName) -> Result<Authority, UserServiceError> {
        (**self).register_authority(name).await
    }

    async fn get_authorities(&self) -> Result<Vec<String>, UserServiceError> {
        (**self).get_authorities().await
    }

    async fn find_authority(
        &self,
        name: &AuthorityName,
    ) -> Result<Option<Authority>, UserServiceError> {
        (**self).find_authority(name).await
    }
}

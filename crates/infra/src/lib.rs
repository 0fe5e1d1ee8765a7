//! Infrastructure layer: user-management collaborator and its stores.

pub mod user_service;

pub use user_service::{InMemoryUserService, UserService, UserServiceError};

#[cfg(feature = "postgres")]
pub use user_service::PostgresUserService;

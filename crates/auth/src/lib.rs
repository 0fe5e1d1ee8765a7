//! `labofap-auth` — access-control model: roles, authorities, tokens, policy.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod authority;
pub mod authorize;
pub mod claims;
pub mod roles;

pub use authority::{Authority, AuthorityName};
pub use authorize::{authorize, AuthzError, Principal};
pub use claims::{Hs256JwtValidator, JwtClaims, JwtValidator, TokenValidationError, validate_claims};
pub use roles::Role;

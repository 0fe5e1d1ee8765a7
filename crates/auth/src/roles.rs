use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier carried in access tokens.
///
/// Roles are opaque strings at this layer. The well-known ones below mirror
/// the authorities seeded into every store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

/// Administrative capability; required by every authority endpoint.
pub const ADMIN: Role = Role(Cow::Borrowed("ROLE_ADMIN"));

/// Regular authenticated user.
pub const USER: Role = Role(Cow::Borrowed("ROLE_USER"));

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

//! Authority entity: a named role record in the access-control model.

use serde::{Deserialize, Serialize};

use labofap_core::{DomainError, DomainResult, Entity, ValueObject};

/// Name of an authority; doubles as its primary key and URL path segment.
///
/// Always non-empty. Surrounding whitespace is trimmed, case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorityName(String);

impl AuthorityName {
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                "authority name cannot be null or empty",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Like [`AuthorityName::new`], with `None` standing for a missing value.
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        match raw {
            Some(raw) => Self::new(raw),
            None => Err(DomainError::validation(
                "authority name cannot be null or empty",
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for AuthorityName {}

impl core::fmt::Display for AuthorityName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AuthorityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AuthorityName> for String {
    fn from(value: AuthorityName) -> Self {
        value.0
    }
}

/// A persisted authority record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    pub name: AuthorityName,
}

impl Authority {
    pub fn new(name: AuthorityName) -> Self {
        Self { name }
    }
}

impl Entity for Authority {
    type Id = AuthorityName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

use std::collections::BTreeMap;
use std::sync::RwLock;

use labofap_auth::{Authority, AuthorityName};

use super::{UserService, UserServiceError, default_authorities};

/// In-memory authority store for tests/dev.
///
/// Names are compared exactly; `ROLE_X` and `role_x` are distinct records.
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    authorities: RwLock<BTreeMap<AuthorityName, Authority>>,
}

impl InMemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `ROLE_ADMIN` and `ROLE_USER`.
    pub fn with_default_authorities() -> Self {
        let authorities = default_authorities()
            .into_iter()
            .map(|name| (name.clone(), Authority::new(name)))
            .collect();
        Self {
            authorities: RwLock::new(authorities),
        }
    }
}

fn poisoned() -> UserServiceError {
    UserServiceError::Store("authority store lock poisoned".to_string())
}

#[async_trait::async_trait]
impl UserService for InMemoryUserService {
    async fn register_authority(&self, name: &AuthorityName) -> Result<Authority, UserServiceError> {
        let mut map = self.authorities.write().map_err(|_| poisoned())?;
        if map.contains_key(name) {
            return Err(UserServiceError::AlreadyExists(name.to_string()));
        }

        let authority = Authority::new(name.clone());
        map.insert(name.clone(), authority.clone());
        tracing::debug!(authority = %name, "authority registered");
        Ok(authority)
    }

    async fn get_authorities(&self) -> Result<Vec<String>, UserServiceError> {
        let map = self.authorities.read().map_err(|_| poisoned())?;
        Ok(map.keys().map(|name| name.to_string()).collect())
    }

    async fn find_authority(
        &self,
        name: &AuthorityName,
    ) -> Result<Option<Authority>, UserServiceError> {
        let map = self.authorities.read().map_err(|_| poisoned())?;
        Ok(map.get(name).cloned())
    }
}

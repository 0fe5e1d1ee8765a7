use labofap_auth::Principal;

/// Principal context for a request (authenticated login + roles).
///
/// Inserted by the auth middleware; every `/api` handler can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn login(&self) -> &str {
        &self.principal.login
    }
}

//! API-side authorization guard.
//!
//! Enforced before handlers run, keeping handlers and the collaborator
//! auth-agnostic.

use labofap_auth::{AuthzError, Role, authorize};

use crate::context::PrincipalContext;

/// Check that the current request's principal holds `role`.
pub fn require_role(principal: &PrincipalContext, role: &Role) -> Result<(), AuthzError> {
    authorize(principal.principal(), role)
}

#[cfg(test)]
mod tests {
    use labofap_auth::{Principal, roles};

    use super::*;

    #[test]
    fn guard_delegates_to_policy() {
        let admin = PrincipalContext::new(Principal::new("admin", vec![roles::ADMIN]));
        let user = PrincipalContext::new(Principal::new("user", vec![roles::USER]));

        assert!(require_role(&admin, &roles::ADMIN).is_ok());
        assert!(matches!(
            require_role(&user, &roles::ADMIN),
            Err(AuthzError::Forbidden(_))
        ));
    }
}

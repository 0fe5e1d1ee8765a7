use std::sync::Arc;

use labofap_infra::UserService;

use crate::app::alerts::AlertHeaders;

/// Collaborators shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    pub users: Arc<dyn UserService>,
    pub alerts: AlertHeaders,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserService>, alerts: AlertHeaders) -> Self {
        Self { users, alerts }
    }
}

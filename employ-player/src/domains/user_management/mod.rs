//! User management domain
//!
//! The paginated roster with search, sort, edit and delete. All roster state
//! lives in [`Roster`]; this domain wires its commands to the remote service.

pub mod messages;
pub mod tasks;
pub mod update;

use std::sync::Arc;

use employ_core::Roster;

use crate::infra::services::UserAdminService;

pub use messages::Message;
pub use update::update_user_management;

/// User management domain state
pub struct UserManagementDomainState {
    pub roster: Roster,
    pub user_admin_service: Arc<dyn UserAdminService>,
}

impl UserManagementDomainState {
    pub fn new(user_admin_service: Arc<dyn UserAdminService>) -> Self {
        Self {
            roster: Roster::new(),
            user_admin_service,
        }
    }
}

impl std::fmt::Debug for UserManagementDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserManagementDomainState")
            .field("roster", &self.roster)
            .finish_non_exhaustive()
    }
}

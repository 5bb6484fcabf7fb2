use std::sync::Arc;

use employ_core::Notifier;

use crate::domains::DomainRegistry;
use crate::domains::auth::AuthDomainState;
use crate::domains::auth::storage::SessionStore;
use crate::domains::user_management::UserManagementDomainState;
use crate::infra::api_client::ApiClient;
use crate::infra::services::{AuthService, UserAdminService};

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Roster,
}

/// Application state
#[derive(Debug)]
pub struct State {
    pub screen: Screen,
    /// Shared with the service adapters; carries the session token.
    pub api_client: Arc<ApiClient>,
    pub domains: DomainRegistry,
    pub notifier: Notifier,
}

impl State {
    pub fn new(
        api_client: Arc<ApiClient>,
        auth_service: Arc<dyn AuthService>,
        user_admin_service: Arc<dyn UserAdminService>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            screen: Screen::Login,
            api_client,
            domains: DomainRegistry {
                auth: AuthDomainState::new(auth_service, session_store),
                user_management: UserManagementDomainState::new(
                    user_admin_service,
                ),
            },
            notifier: Notifier::default(),
        }
    }
}

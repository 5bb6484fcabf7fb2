//! Domain-driven modules for the player
//!
//! Each domain owns its state, messages and update handlers. Domains talk
//! to each other only through [`CrossDomainEvent`]s.
//!
//! [`CrossDomainEvent`]: crate::common::messages::CrossDomainEvent

pub mod auth;
pub mod ui;
pub mod user_management;

use self::auth::AuthDomainState;
use self::user_management::UserManagementDomainState;

/// All domain states, owned by the application [`State`](crate::state::State).
#[derive(Debug)]
pub struct DomainRegistry {
    pub auth: AuthDomainState,
    pub user_management: UserManagementDomainState,
}

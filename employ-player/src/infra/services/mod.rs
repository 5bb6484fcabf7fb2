//! Service seams between the domains and the remote API.
//!
//! Domains hold these as trait objects so tests can substitute mocks.

pub mod auth;
pub mod user_management;

pub use auth::{AuthApiAdapter, AuthService};
pub use user_management::{UserAdminApiAdapter, UserAdminService};

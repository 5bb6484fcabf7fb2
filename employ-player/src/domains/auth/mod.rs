//! Session gate: the login form and the stored session token.

pub mod errors;
pub mod messages;
pub mod storage;
pub mod update;

use std::sync::Arc;

use crate::infra::services::AuthService;
use storage::SessionStore;

pub use messages::Message;
pub use update::update_auth;

/// Login form contents.
#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// A login request is in flight.
    pub submitting: bool,
}

impl LoginForm {
    pub fn has_credentials(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"***")
            .field("submitting", &self.submitting)
            .finish()
    }
}

pub struct AuthDomainState {
    pub form: LoginForm,
    pub auth_service: Arc<dyn AuthService>,
    pub session_store: Arc<dyn SessionStore>,
}

impl AuthDomainState {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            form: LoginForm::default(),
            auth_service,
            session_store,
        }
    }
}

impl std::fmt::Debug for AuthDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthDomainState")
            .field("form", &self.form)
            .field("session_store", &self.session_store)
            .finish_non_exhaustive()
    }
}

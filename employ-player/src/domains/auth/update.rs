use std::sync::Arc;

use employ_core::Feedback;
use employ_model::{LoginRequest, SessionToken};
use iced::Task;
use log::{error, info, warn};

use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::domains::auth::messages::Message;
use crate::infra::services::AuthService;
use crate::state::State;

/// Title of every notification raised by the login form.
pub const LOGIN_FAILED: &str = "Login failed";

pub fn update_auth(state: &mut State, message: Message) -> DomainUpdateResult {
    match message {
        Message::EmailChanged(email) => {
            state.domains.auth.form.email = email;
            DomainUpdateResult::none()
        }
        Message::PasswordChanged(password) => {
            state.domains.auth.form.password = password;
            DomainUpdateResult::none()
        }
        Message::Submit => handle_submit(state),
        Message::LoginResult(result) => handle_login_result(state, result),
    }
}

pub fn handle_submit(state: &mut State) -> DomainUpdateResult {
    let auth = &mut state.domains.auth;
    if auth.form.submitting {
        return DomainUpdateResult::none();
    }
    if !auth.form.has_credentials() {
        return DomainUpdateResult::notify(
            Feedback::error("Email and password are required")
                .with_title(LOGIN_FAILED),
        );
    }

    auth.form.submitting = true;
    let request =
        LoginRequest::new(auth.form.email.trim(), auth.form.password.clone());
    let service = Arc::clone(&auth.auth_service);

    DomainUpdateResult::task(
        Task::perform(login(service, request), Message::LoginResult)
            .map(DomainMessage::Auth),
    )
}

pub fn handle_login_result(
    state: &mut State,
    result: Result<SessionToken, String>,
) -> DomainUpdateResult {
    let auth = &mut state.domains.auth;
    auth.form.submitting = false;

    match result {
        Ok(token) => {
            if let Err(e) = auth.session_store.save(&token) {
                error!("Failed to persist session token: {}", e);
                return DomainUpdateResult::notify(
                    Feedback::error("Could not store the session")
                        .with_title(LOGIN_FAILED),
                );
            }
            info!("Login successful");
            auth.form.password.clear();
            DomainUpdateResult::event(CrossDomainEvent::Authenticated)
        }
        Err(e) => {
            warn!("Login failed: {}", e);
            DomainUpdateResult::notify(
                Feedback::error(e).with_title(LOGIN_FAILED),
            )
        }
    }
}

/// Performs the login call, flattening the error for the message.
pub async fn login(
    service: Arc<dyn AuthService>,
    request: LoginRequest,
) -> Result<SessionToken, String> {
    service.login(request).await.map_err(|e| format!("{e:#}"))
}

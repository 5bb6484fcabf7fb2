use std::sync::Arc;

use employ_core::roster::SubmitRejected;
use employ_core::{Feedback, FetchOutcome, FetchTicket};
use employ_model::{UserId, UserPage};
use iced::Task;
use log::{debug, error, info, warn};

use super::tasks;
use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::domains::user_management::messages::Message;
use crate::state::State;

/// Handle user management domain messages
pub fn update_user_management(
    state: &mut State,
    message: Message,
) -> DomainUpdateResult {
    match message {
        Message::EnterRoster => handle_enter_roster(state),
        Message::PageLoaded(ticket, result) => {
            handle_page_loaded(state, ticket, result);
            DomainUpdateResult::none()
        }
        Message::PreviousPage => {
            let ticket = state.domains.user_management.roster.previous_page();
            fetch_task(state, ticket)
        }
        Message::NextPage => {
            let ticket = state.domains.user_management.roster.next_page();
            fetch_task(state, ticket)
        }

        Message::SearchChanged(term) => {
            state.domains.user_management.roster.set_search(term);
            DomainUpdateResult::none()
        }
        Message::SortChanged(option) => {
            state.domains.user_management.roster.set_sort(option.0);
            DomainUpdateResult::none()
        }

        Message::EditUser(id) => {
            if !state.domains.user_management.roster.begin_edit(id) {
                warn!("Edit requested for unknown user {}", id);
            }
            DomainUpdateResult::none()
        }
        Message::DraftChanged(field, value) => {
            state
                .domains
                .user_management
                .roster
                .edit_field(field, value);
            DomainUpdateResult::none()
        }
        Message::SubmitEdit => handle_submit_edit(state),
        Message::CancelEdit => {
            state.domains.user_management.roster.cancel_edit();
            DomainUpdateResult::none()
        }
        Message::UserUpdated(id, result) => {
            let feedback = state
                .domains
                .user_management
                .roster
                .apply_update(id, result);
            DomainUpdateResult::notify(feedback)
        }

        Message::DeleteUser(id) => {
            debug!("Delete requested for user {}, awaiting confirmation", id);
            state.domains.user_management.roster.request_delete(id);
            DomainUpdateResult::none()
        }
        Message::ConfirmDelete => handle_confirm_delete(state),
        Message::CancelDelete => {
            state.domains.user_management.roster.cancel_delete();
            DomainUpdateResult::none()
        }
        Message::UserDeleted(id, result) => {
            let feedback = state
                .domains
                .user_management
                .roster
                .apply_delete(id, result);
            DomainUpdateResult::notify(feedback)
        }
    }
}

/// Roster entry guard: without a stored token the user goes back to the
/// login screen and nothing is fetched.
pub fn handle_enter_roster(state: &mut State) -> DomainUpdateResult {
    let token = match state.domains.auth.session_store.load() {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to read stored session: {}", e);
            None
        }
    };

    let Some(token) = token else {
        info!("No stored session, returning to login");
        return DomainUpdateResult::event(CrossDomainEvent::SessionMissing);
    };

    state.api_client.set_token(Some(token));
    let ticket = state.domains.user_management.roster.begin_fetch();
    fetch_task(state, Some(ticket))
}

pub fn handle_page_loaded(
    state: &mut State,
    ticket: FetchTicket,
    result: Result<UserPage, String>,
) -> FetchOutcome {
    let outcome = state
        .domains
        .user_management
        .roster
        .finish_fetch(ticket, result);
    if outcome == FetchOutcome::Stale {
        debug!("Ignored stale page response #{}", ticket.seq);
    }
    outcome
}

pub fn handle_submit_edit(state: &mut State) -> DomainUpdateResult {
    let domain = &mut state.domains.user_management;
    match domain.roster.submit_edit() {
        Ok(command) => {
            let id = command.id;
            let service = Arc::clone(&domain.user_admin_service);
            DomainUpdateResult::task(Task::perform(
                tasks::update_user(service, command),
                move |result| {
                    DomainMessage::from(Message::UserUpdated(id, result))
                },
            ))
        }
        Err(SubmitRejected::Incomplete) => {
            DomainUpdateResult::notify(Feedback::error(
                SubmitRejected::Incomplete.to_string(),
            ))
        }
        Err(rejected) => {
            debug!("Edit submission ignored: {}", rejected);
            DomainUpdateResult::none()
        }
    }
}

pub fn handle_confirm_delete(state: &mut State) -> DomainUpdateResult {
    let domain = &mut state.domains.user_management;
    let Some(command) = domain.roster.confirm_delete() else {
        return DomainUpdateResult::none();
    };
    let id: UserId = command.id;
    let service = Arc::clone(&domain.user_admin_service);
    DomainUpdateResult::task(Task::perform(
        tasks::delete_user(service, command),
        move |result| DomainMessage::from(Message::UserDeleted(id, result)),
    ))
}

fn fetch_task(
    state: &State,
    ticket: Option<FetchTicket>,
) -> DomainUpdateResult {
    let Some(ticket) = ticket else {
        return DomainUpdateResult::none();
    };
    let service = Arc::clone(&state.domains.user_management.user_admin_service);
    DomainUpdateResult::task(Task::perform(
        tasks::fetch_page(service, ticket.page),
        move |result| DomainMessage::from(Message::PageLoaded(ticket, result)),
    ))
}

//! Top-level update: routes messages to their domain and applies the
//! cross-domain events they raise.

use iced::Task;
use log::{debug, info};

use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::domains::auth::update_auth;
use crate::domains::ui::feedback_ui::{self, update_feedback_ui};
use crate::domains::user_management::{self, update_user_management};
use crate::state::{Screen, State};

pub fn update(
    state: &mut State,
    message: DomainMessage,
) -> Task<DomainMessage> {
    debug!("[Update] {}", message.name());

    let result = match message {
        DomainMessage::Auth(msg) => update_auth(state, msg),
        DomainMessage::UserManagement(msg) => {
            update_user_management(state, msg)
        }
        DomainMessage::Feedback(msg) => update_feedback_ui(state, msg),
        DomainMessage::NoOp => DomainUpdateResult::none(),
    };

    apply_result(state, result)
}

fn apply_result(
    state: &mut State,
    result: DomainUpdateResult,
) -> Task<DomainMessage> {
    let DomainUpdateResult { task, events } = result;
    if events.is_empty() {
        return task;
    }

    let mut tasks = Vec::with_capacity(events.len() + 1);
    tasks.push(task);
    for event in events {
        tasks.push(handle_event(state, event));
    }
    Task::batch(tasks)
}

/// Applies one cross-domain event.
pub fn handle_event(
    state: &mut State,
    event: CrossDomainEvent,
) -> Task<DomainMessage> {
    debug!("[Event] {:?}", event);
    match event {
        CrossDomainEvent::Authenticated => {
            info!("Session established, showing roster");
            state.screen = Screen::Roster;
            let result = update_user_management(
                state,
                user_management::Message::EnterRoster,
            );
            apply_result(state, result)
        }
        CrossDomainEvent::SessionMissing => {
            state.screen = Screen::Login;
            Task::none()
        }
        CrossDomainEvent::Notify(feedback) => {
            feedback_ui::notify(state, feedback)
        }
    }
}

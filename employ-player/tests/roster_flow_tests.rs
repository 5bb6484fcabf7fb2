mod common;

use common::{ann, default_state, first_page, loaded_state};
use employ_core::roster::FETCH_ERROR;
use employ_core::{FeedbackKind, FetchOutcome, FetchTicket, SortKey};
use employ_model::{DraftField, UserId, UserPage, UserPatch};
use employ_player::domains::ui::feedback_ui::FeedbackMessage;
use employ_player::domains::user_management::messages::{Message, SortOption};
use employ_player::domains::user_management::update::{
    handle_confirm_delete, handle_page_loaded,
};
use employ_player::state::State;
use employ_player::update::update;

fn send(state: &mut State, message: Message) {
    let _ = update(state, message.into());
}

fn visible_first_names(state: &State) -> Vec<String> {
    state
        .domains
        .user_management
        .roster
        .view()
        .records()
        .iter()
        .map(|user| user.first_name.clone())
        .collect()
}

#[test]
fn search_and_sort_narrow_and_order_the_view() {
    let mut state = loaded_state();

    send(&mut state, Message::SearchChanged("lee".into()));
    send(
        &mut state,
        Message::SortChanged(SortOption(SortKey::parse("first_name_desc"))),
    );

    assert_eq!(visible_first_names(&state), vec!["Bob", "Ann"]);
    assert_eq!(
        state.domains.user_management.roster.view().summary(),
        "2 users found"
    );

    send(&mut state, Message::SortChanged(SortOption(None)));
    send(&mut state, Message::SearchChanged(String::new()));
    assert_eq!(visible_first_names(&state), vec!["Ann", "Bob", "Cara"]);
}

#[test]
fn successful_update_merges_record_and_closes_form() {
    let mut state = loaded_state();
    let id = UserId::from(1);

    send(&mut state, Message::EditUser(id));
    send(
        &mut state,
        Message::DraftChanged(DraftField::FirstName, "Annie".into()),
    );
    send(&mut state, Message::SubmitEdit);
    assert!(
        state
            .domains
            .user_management
            .roster
            .editing()
            .is_some_and(|session| session.submitting)
    );

    let patch = UserPatch {
        first_name: Some("Annie".into()),
        updated_at: Some("2024-01-01T00:00:00.000Z".into()),
        ..UserPatch::default()
    };
    send(&mut state, Message::UserUpdated(id, Ok(patch)));

    let roster = &state.domains.user_management.roster;
    let record = roster.record(id).expect("record");
    assert_eq!(record.first_name, "Annie");
    assert_eq!(record.last_name, "Lee");
    assert!(roster.editing().is_none());

    let notification = state.notifier.current().expect("notification");
    assert_eq!(notification.kind, FeedbackKind::Success);
    assert_eq!(notification.message, "User updated successfully");
}

#[test]
fn failed_update_keeps_record_and_form() {
    let mut state = loaded_state();
    let id = UserId::from(1);

    send(&mut state, Message::EditUser(id));
    send(
        &mut state,
        Message::DraftChanged(DraftField::FirstName, "Annie".into()),
    );
    send(&mut state, Message::SubmitEdit);
    send(&mut state, Message::UserUpdated(id, Err("HTTP 500".into())));

    let roster = &state.domains.user_management.roster;
    assert_eq!(roster.record(id), Some(&ann()));
    let session = roster.editing().expect("form stays open");
    assert!(!session.submitting);
    assert_eq!(session.draft.first_name, "Annie");

    let notification = state.notifier.current().expect("notification");
    assert_eq!(notification.kind, FeedbackKind::Error);
    assert_eq!(notification.message, "Failed to update user");
}

#[test]
fn late_update_result_does_not_close_reopened_form() {
    let mut state = loaded_state();
    let id = UserId::from(1);

    send(&mut state, Message::EditUser(id));
    send(&mut state, Message::SubmitEdit);
    send(&mut state, Message::CancelEdit);
    send(&mut state, Message::EditUser(id));
    send(
        &mut state,
        Message::DraftChanged(DraftField::Email, "typing@x.com".into()),
    );

    send(&mut state, Message::UserUpdated(id, Ok(UserPatch::default())));

    let session = state
        .domains
        .user_management
        .roster
        .editing()
        .expect("reopened form stays open");
    assert_eq!(session.draft.email, "typing@x.com");
}

#[test]
fn incomplete_draft_is_not_submitted() {
    let mut state = loaded_state();

    send(&mut state, Message::EditUser(UserId::from(1)));
    send(&mut state, Message::DraftChanged(DraftField::Email, "  ".into()));
    send(&mut state, Message::SubmitEdit);

    let session = state
        .domains
        .user_management
        .roster
        .editing()
        .expect("form stays open");
    assert!(!session.submitting);
    let notification = state.notifier.current().expect("notification");
    assert_eq!(notification.message, "All fields are required");
}

#[test]
fn cancel_edit_discards_draft() {
    let mut state = loaded_state();

    send(&mut state, Message::EditUser(UserId::from(2)));
    send(&mut state, Message::DraftChanged(DraftField::LastName, "X".into()));
    send(&mut state, Message::CancelEdit);

    let roster = &state.domains.user_management.roster;
    assert!(roster.editing().is_none());
    assert_eq!(roster.record(UserId::from(2)).unwrap().last_name, "Lee");
}

#[test]
fn delete_requires_confirmation() {
    let mut state = loaded_state();
    let id = UserId::from(2);

    send(&mut state, Message::DeleteUser(id));
    assert_eq!(
        state.domains.user_management.roster.pending_deletion(),
        Some(id)
    );
    assert_eq!(state.domains.user_management.roster.records().len(), 3);

    send(&mut state, Message::CancelDelete);
    assert!(
        state
            .domains
            .user_management
            .roster
            .pending_deletion()
            .is_none()
    );
    assert_eq!(state.domains.user_management.roster.records().len(), 3);
}

#[test]
fn confirmed_delete_removes_record() {
    let mut state = loaded_state();
    let id = UserId::from(2);

    send(&mut state, Message::DeleteUser(id));
    let _task = handle_confirm_delete(&mut state).task;
    assert!(
        state
            .domains
            .user_management
            .roster
            .pending_deletion()
            .is_none()
    );

    send(&mut state, Message::UserDeleted(id, Ok(())));

    let roster = &state.domains.user_management.roster;
    assert!(roster.record(id).is_none());
    assert_eq!(roster.view().summary(), "2 users found");
    let notification = state.notifier.current().expect("notification");
    assert_eq!(notification.kind, FeedbackKind::Success);
    assert_eq!(notification.message, "User deleted successfully");
}

#[test]
fn confirm_without_pending_deletion_does_nothing() {
    let mut state = loaded_state();

    let result = handle_confirm_delete(&mut state);

    assert!(result.events.is_empty());
    assert_eq!(state.domains.user_management.roster.records().len(), 3);
}

#[test]
fn failed_delete_keeps_record() {
    let mut state = loaded_state();
    let id = UserId::from(2);

    send(&mut state, Message::DeleteUser(id));
    send(&mut state, Message::ConfirmDelete);
    send(&mut state, Message::UserDeleted(id, Err("HTTP 500".into())));

    assert!(state.domains.user_management.roster.record(id).is_some());
    let notification = state.notifier.current().expect("notification");
    assert_eq!(notification.kind, FeedbackKind::Error);
    assert_eq!(notification.message, "Failed to delete user");
}

#[test]
fn fetch_failure_keeps_records_and_page_count() {
    let mut state = loaded_state();

    send(&mut state, Message::NextPage);
    let roster = &state.domains.user_management.roster;
    assert_eq!(roster.window().current(), 2);
    assert!(roster.is_loading());

    // Second ticket overall: the initial load used the first.
    let ticket = FetchTicket { seq: 2, page: 2 };
    let outcome = handle_page_loaded(
        &mut state,
        ticket,
        Err("connection refused".into()),
    );

    let roster = &state.domains.user_management.roster;
    assert_eq!(outcome, FetchOutcome::Failed);
    assert_eq!(roster.error(), Some(FETCH_ERROR));
    assert_eq!(roster.records().len(), 3);
    assert_eq!(roster.window().total(), 2);
    assert_eq!(roster.window().label(), "Page 1 of 2");
    assert_eq!(visible_first_names(&state), vec!["Ann", "Bob", "Cara"]);
    assert!(!state.domains.user_management.roster.is_loading());
}

#[test]
fn stale_page_response_is_ignored() {
    let mut state = default_state();
    let roster = &mut state.domains.user_management.roster;
    let stale = roster.begin_fetch();
    let current = roster.begin_fetch();

    let late = UserPage::new(vec![ann()], 1);
    assert_eq!(
        handle_page_loaded(&mut state, stale, Ok(late)),
        FetchOutcome::Stale
    );
    assert!(state.domains.user_management.roster.records().is_empty());

    assert_eq!(
        handle_page_loaded(&mut state, current, Ok(first_page())),
        FetchOutcome::Applied
    );
    assert_eq!(state.domains.user_management.roster.records().len(), 3);
}

#[test]
fn paging_stays_within_bounds() {
    let mut state = loaded_state();

    send(&mut state, Message::PreviousPage);
    assert_eq!(state.domains.user_management.roster.window().current(), 1);
    assert!(!state.domains.user_management.roster.is_loading());

    send(&mut state, Message::NextPage);
    send(&mut state, Message::NextPage);
    assert_eq!(state.domains.user_management.roster.window().current(), 2);
    assert_eq!(
        state.domains.user_management.roster.window().label(),
        "Page 2 of 2"
    );
}

#[test]
fn stale_timer_does_not_close_newer_notification() {
    let mut state = loaded_state();

    send(&mut state, Message::UserDeleted(UserId::from(3), Ok(())));
    let first = state.notifier.current().expect("first").id;

    send(&mut state, Message::UserDeleted(UserId::from(2), Err("x".into())));
    let second = state.notifier.current().expect("second").id;
    assert_ne!(first, second);

    let _ = update(&mut state, FeedbackMessage::Expired(first).into());
    assert_eq!(state.notifier.current().map(|n| n.id), Some(second));

    let _ = update(&mut state, FeedbackMessage::Expired(second).into());
    assert!(state.notifier.current().is_none());
}

#[test]
fn dismiss_closes_notification() {
    let mut state = loaded_state();
    send(&mut state, Message::UserDeleted(UserId::from(3), Ok(())));

    let _ = update(&mut state, FeedbackMessage::Dismiss.into());

    assert!(state.notifier.current().is_none());
}

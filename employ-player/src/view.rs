use iced::Element;
use iced::widget::stack;

use crate::common::messages::DomainMessage;
use crate::domains::ui::views;
use crate::state::{Screen, State};

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let mut layers: Vec<Element<'_, DomainMessage>> = Vec::with_capacity(3);

    match state.screen {
        Screen::Login => {
            layers.push(
                views::view_login(&state.domains.auth.form)
                    .map(DomainMessage::Auth),
            );
        }
        Screen::Roster => {
            let roster = &state.domains.user_management.roster;
            layers.push(
                views::view_roster(roster).map(DomainMessage::UserManagement),
            );

            if let Some(session) = roster.editing() {
                layers.push(
                    views::view_edit_user(session)
                        .map(DomainMessage::UserManagement),
                );
            } else if roster.pending_deletion().is_some() {
                layers.push(
                    views::view_confirm_delete()
                        .map(DomainMessage::UserManagement),
                );
            }
        }
    }

    if let Some(notification) = state.notifier.current() {
        layers.push(
            views::view_notification(notification).map(DomainMessage::Feedback),
        );
    }

    stack(layers).into()
}

use employ_core::{Feedback, NOTIFICATION_TTL};
use iced::Task;
use log::debug;

use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::domains::ui::feedback_ui::FeedbackMessage;
use crate::state::State;

pub fn update_feedback_ui(
    state: &mut State,
    message: FeedbackMessage,
) -> DomainUpdateResult {
    match message {
        FeedbackMessage::Dismiss => {
            state.notifier.dismiss();
        }
        FeedbackMessage::Expired(id) => {
            if !state.notifier.expire(id) {
                debug!("Notification {:?} already replaced or dismissed", id);
            }
        }
    }
    DomainUpdateResult::none()
}

/// Shows `feedback` and schedules its auto-dismissal.
pub fn notify(state: &mut State, feedback: Feedback) -> Task<DomainMessage> {
    let id = state.notifier.show(feedback);
    // Built inside the future: creating a timer needs a running runtime.
    Task::perform(
        async { tokio::time::sleep(NOTIFICATION_TTL).await },
        move |()| DomainMessage::from(FeedbackMessage::Expired(id)),
    )
}

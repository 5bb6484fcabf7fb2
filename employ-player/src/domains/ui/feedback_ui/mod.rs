pub mod update;

use employ_core::NotificationId;

pub use update::{notify, update_feedback_ui};

#[derive(Clone)]
pub enum FeedbackMessage {
    /// The close button was pressed.
    Dismiss,
    /// The auto-dismiss timer of a notification fired.
    Expired(NotificationId),
}

impl FeedbackMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dismiss => "UI::DismissNotification",
            Self::Expired(_) => "UI::NotificationExpired",
        }
    }
}

impl std::fmt::Debug for FeedbackMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dismiss => write!(f, "UI::DismissNotification"),
            Self::Expired(id) => write!(f, "UI::NotificationExpired({id:?})"),
        }
    }
}

//! Transient success/error notifications.
//!
//! Only one notification is visible at a time. Each one gets a fresh id so an
//! auto-dismiss timer scheduled for an older notification cannot close a
//! newer one.

use std::time::Duration;

/// How long a notification stays up unless dismissed earlier.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Colour of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// What to tell the user, before it is given an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Heading; defaults to the kind's name.
    pub title: String,
    /// Body text.
    pub message: String,
    #[allow(missing_docs)]
    pub kind: FeedbackKind,
}

impl Feedback {
    /// Success notification titled "Success".
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            message: message.into(),
            kind: FeedbackKind::Success,
        }
    }

    /// Error notification titled "Error".
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            kind: FeedbackKind::Error,
        }
    }

    #[allow(missing_docs)]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Identity of one shown notification; never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

/// A notification as it is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub kind: FeedbackKind,
}

/// Holder of the single visible notification.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
    next_id: u64,
}

impl Notifier {
    /// Shows `feedback`, replacing whatever is visible.
    pub fn show(&mut self, feedback: Feedback) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.current = Some(Notification {
            id,
            title: feedback.title,
            message: feedback.message,
            kind: feedback.kind,
        });
        id
    }

    /// Visible notification, if any.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Closes the visible notification regardless of its id.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Timer callback. Returns `true` if `id` was still showing and has now
    /// been dismissed.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        match &self.current {
            Some(notification) if notification.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

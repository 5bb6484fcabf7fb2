use employ_core::Feedback;
use iced::Task;

use crate::domains::auth;
use crate::domains::ui::feedback_ui;
use crate::domains::user_management;

/// Events one domain raises for the application to route elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossDomainEvent {
    /// A session token was stored; move to the roster.
    Authenticated,
    /// The roster was entered without a stored session.
    SessionMissing,
    /// Show a transient notification.
    Notify(Feedback),
}

/// Result of a domain update that includes both a task and events to emit
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    pub fn none() -> Self {
        Self::task(Task::none())
    }

    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    pub fn event(event: CrossDomainEvent) -> Self {
        Self::with_events(Task::none(), vec![event])
    }

    /// Create a result with task and events
    pub fn with_events(
        task: Task<DomainMessage>,
        events: Vec<CrossDomainEvent>,
    ) -> Self {
        Self { task, events }
    }

    pub fn notify(feedback: Feedback) -> Self {
        Self::event(CrossDomainEvent::Notify(feedback))
    }
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// The main domain message router
#[derive(Clone)]
pub enum DomainMessage {
    /// Session gate
    Auth(auth::messages::Message),

    /// User roster
    UserManagement(user_management::messages::Message),

    /// Notifications
    Feedback(feedback_ui::FeedbackMessage),

    NoOp,
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auth(msg) => msg.name(),
            Self::UserManagement(msg) => msg.name(),
            Self::Feedback(msg) => msg.name(),
            Self::NoOp => "NoOp",
        }
    }
}

impl std::fmt::Debug for DomainMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth(msg) => write!(f, "Auth({})", msg.sanitized_display()),
            Self::UserManagement(msg) => write!(f, "UserManagement({:?})", msg),
            Self::Feedback(msg) => write!(f, "Feedback({:?})", msg),
            Self::NoOp => write!(f, "NoOp"),
        }
    }
}

impl From<auth::messages::Message> for DomainMessage {
    fn from(msg: auth::messages::Message) -> Self {
        DomainMessage::Auth(msg)
    }
}

impl From<user_management::messages::Message> for DomainMessage {
    fn from(msg: user_management::messages::Message) -> Self {
        DomainMessage::UserManagement(msg)
    }
}

impl From<feedback_ui::FeedbackMessage> for DomainMessage {
    fn from(msg: feedback_ui::FeedbackMessage) -> Self {
        DomainMessage::Feedback(msg)
    }
}

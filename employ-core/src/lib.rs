//! Core library for the Employ client.
//!
//! Everything in here is synchronous and free of I/O: the route table for the
//! remote API, the filtered/sorted roster view, page navigation and the
//! reducer that reconciles local state with the results of remote calls.
//! The desktop client performs the network calls described by the commands
//! this crate hands back.

/// Routes of the remote user API.
pub mod api;
pub mod error;
pub mod feedback;
pub mod query;
pub mod roster;

pub use error::{ApiError, ApiResult};
pub use feedback::{
    Feedback, FeedbackKind, NOTIFICATION_TTL, Notification, NotificationId,
    Notifier,
};
pub use query::{
    DerivedView, SortField, SortKey, SortOrder, derive_view, matches_search,
};
pub use roster::{
    DeleteCommand, FetchOutcome, FetchTicket, PageWindow, Roster,
    UpdateCommand,
};

pub use employ_model as model;

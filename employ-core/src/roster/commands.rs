use employ_model::{UserDraft, UserId};

/// Remote update the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct UpdateCommand {
    pub id: UserId,
    pub draft: UserDraft,
}

/// Remote delete the caller must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    /// User to delete.
    pub id: UserId,
}

/// Why an edit could not be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    /// No form is open.
    #[error("No user is being edited")]
    NoDraft,
    /// A field is blank after trimming.
    #[error("All fields are required")]
    Incomplete,
    /// The form was already submitted.
    #[error("An update is already in progress")]
    InFlight,
}

use std::fmt;

use employ_core::{FetchTicket, SortKey};
use employ_model::{DraftField, UserId, UserPage, UserPatch};

#[derive(Clone, Debug)]
pub enum Message {
    /// The roster screen was entered; check the session and load the page.
    EnterRoster,
    PageLoaded(FetchTicket, Result<UserPage, String>),
    PreviousPage,
    NextPage,

    // View criteria
    SearchChanged(String),
    SortChanged(SortOption),

    // Editing
    EditUser(UserId),
    DraftChanged(DraftField, String),
    SubmitEdit,
    CancelEdit,
    UserUpdated(UserId, Result<UserPatch, String>),

    // Deletion
    DeleteUser(UserId),
    ConfirmDelete,
    CancelDelete,
    UserDeleted(UserId, Result<(), String>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnterRoster => "UserManagement::EnterRoster",
            Self::PageLoaded(..) => "UserManagement::PageLoaded",
            Self::PreviousPage => "UserManagement::PreviousPage",
            Self::NextPage => "UserManagement::NextPage",
            Self::SearchChanged(_) => "UserManagement::SearchChanged",
            Self::SortChanged(_) => "UserManagement::SortChanged",
            Self::EditUser(_) => "UserManagement::EditUser",
            Self::DraftChanged(..) => "UserManagement::DraftChanged",
            Self::SubmitEdit => "UserManagement::SubmitEdit",
            Self::CancelEdit => "UserManagement::CancelEdit",
            Self::UserUpdated(..) => "UserManagement::UserUpdated",
            Self::DeleteUser(_) => "UserManagement::DeleteUser",
            Self::ConfirmDelete => "UserManagement::ConfirmDelete",
            Self::CancelDelete => "UserManagement::CancelDelete",
            Self::UserDeleted(..) => "UserManagement::UserDeleted",
        }
    }
}

/// Entry of the sort picker. `None` is the "Sort By" placeholder and keeps
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption(pub Option<SortKey>);

impl SortOption {
    pub const ALL: [SortOption; 7] = [
        SortOption(None),
        SortOption(Some(SortKey::ALL[0])),
        SortOption(Some(SortKey::ALL[1])),
        SortOption(Some(SortKey::ALL[2])),
        SortOption(Some(SortKey::ALL[3])),
        SortOption(Some(SortKey::ALL[4])),
        SortOption(Some(SortKey::ALL[5])),
    ];
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(key) => fmt::Display::fmt(&key, f),
            None => f.write_str("Sort By"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_options_start_with_placeholder() {
        assert_eq!(SortOption::ALL[0].to_string(), "Sort By");
        assert_eq!(SortOption::ALL[1].to_string(), "First Name (A-Z)");
        assert_eq!(SortOption::ALL[6].to_string(), "Email (Z-A)");
    }
}

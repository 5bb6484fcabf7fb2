//! The user roster: one page of records plus everything the management
//! screen layers on top of it.
//!
//! `Roster` is a reducer. Methods mutate local state and, when a remote call
//! is needed, return a command describing it; results are fed back through
//! the matching `apply_*`/`finish_*` method. Nothing in here performs I/O.

mod commands;
mod fetch;
mod page_window;

pub use commands::{DeleteCommand, SubmitRejected, UpdateCommand};
pub use fetch::{FetchOutcome, FetchTicket};
pub use page_window::PageWindow;

use employ_model::{
    DraftField, UserDraft, UserId, UserPage, UserPatch, UserRecord,
};
use log::{debug, info, warn};

use crate::feedback::Feedback;
use crate::query::{DerivedView, SortKey};
use fetch::FetchSequencer;

/// Message shown when a page could not be loaded.
pub const FETCH_ERROR: &str = "Failed to fetch users";

/// An open edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// User being edited.
    pub id: UserId,
    /// Field values as typed.
    pub draft: UserDraft,
    /// An update for this form is in flight.
    pub submitting: bool,
}

/// Client-side state of the management screen.
#[derive(Debug, Default)]
pub struct Roster {
    records: Vec<UserRecord>,
    revision: u64,
    window: PageWindow,
    /// Page whose records are currently held.
    applied_page: Option<u32>,
    search: String,
    sort: Option<SortKey>,
    view: DerivedView,
    editing: Option<EditSession>,
    pending_deletion: Option<UserId>,
    fetches: FetchSequencer,
    loading: bool,
    error: Option<String>,
}

impl Roster {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of the last applied page, in server order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Record with `id` on the current page.
    pub fn record(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Filtered and sorted projection for display.
    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Page counter.
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Current search term, untrimmed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Active sort key; `None` keeps server order.
    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    /// Open edit form, if any.
    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// User awaiting delete confirmation.
    pub fn pending_deletion(&self) -> Option<UserId> {
        self.pending_deletion
    }

    /// A page request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed page load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // Criteria

    /// Replaces the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.refresh_view();
    }

    /// Replaces the sort key.
    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
        self.refresh_view();
    }

    // Paging

    /// Starts a request for the current page.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        let ticket = self.fetches.issue(self.window.current());
        debug!("fetch #{} issued for page {}", ticket.seq, ticket.page);
        ticket
    }

    /// Moves one page back; `None` when already on the first page.
    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        self.window.previous().then(|| self.begin_fetch())
    }

    /// Moves one page forward; `None` when already on the last page.
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.window.next().then(|| self.begin_fetch())
    }

    /// Applies a page response. The page replaces the record set wholesale.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<UserPage, String>,
    ) -> FetchOutcome {
        if !self.fetches.is_current(&ticket) {
            debug!(
                "dropping stale response #{} for page {}",
                ticket.seq, ticket.page
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                info!(
                    "loaded page {} ({} users, {} pages)",
                    ticket.page,
                    page.data.len(),
                    page.total_pages
                );
                self.records = page.data;
                self.window.set_total(page.total_pages);
                self.applied_page = Some(self.window.current());
                self.error = None;
                self.bump();
                FetchOutcome::Applied
            }
            Err(err) => {
                warn!("failed to fetch page {}: {}", ticket.page, err);
                // The counter follows the records that are still shown.
                if let Some(page) = self.applied_page {
                    self.window.go_to(page);
                }
                self.error = Some(FETCH_ERROR.to_string());
                FetchOutcome::Failed
            }
        }
    }

    // Editing

    /// Opens the edit form for `id`. Returns `false` if no such record is
    /// loaded.
    pub fn begin_edit(&mut self, id: UserId) -> bool {
        let Some(record) = self.record(id) else {
            return false;
        };
        self.editing = Some(EditSession {
            id,
            draft: UserDraft::from(record),
            submitting: false,
        });
        true
    }

    /// Updates one field of the open form.
    pub fn edit_field(&mut self, field: DraftField, value: String) {
        if let Some(session) = self.editing.as_mut() {
            session.draft.set(field, value);
        }
    }

    /// Closes the form without submitting.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Hands back the update to perform. The form stays open until the
    /// result arrives.
    pub fn submit_edit(&mut self) -> Result<UpdateCommand, SubmitRejected> {
        let session = self.editing.as_mut().ok_or(SubmitRejected::NoDraft)?;
        if session.submitting {
            return Err(SubmitRejected::InFlight);
        }
        if !session.draft.is_complete() {
            return Err(SubmitRejected::Incomplete);
        }
        session.submitting = true;
        Ok(UpdateCommand {
            id: session.id,
            draft: session.draft.clone(),
        })
    }

    /// Reconciles an update result. On success the server response is merged
    /// over the stored record and the form closes; on failure nothing but the
    /// in-flight flag changes.
    pub fn apply_update(
        &mut self,
        id: UserId,
        result: Result<UserPatch, String>,
    ) -> Feedback {
        match result {
            Ok(patch) => {
                if let Some(record) =
                    self.records.iter_mut().find(|record| record.id == id)
                {
                    *record = record.merged_with(&patch);
                }
                // A form reopened after the submit has not been sent yet.
                if self
                    .editing
                    .as_ref()
                    .is_some_and(|s| s.id == id && s.submitting)
                {
                    self.editing = None;
                }
                self.bump();
                info!("user {} updated", id);
                Feedback::success("User updated successfully")
            }
            Err(err) => {
                if let Some(session) = self
                    .editing
                    .as_mut()
                    .filter(|s| s.id == id && s.submitting)
                {
                    session.submitting = false;
                }
                warn!("update of user {} failed: {}", id, err);
                Feedback::error("Failed to update user")
            }
        }
    }

    // Deletion

    /// Arms the confirmation step; no remote call yet.
    /// Asks for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: UserId) {
        self.pending_deletion = Some(id);
    }

    /// Drops the pending confirmation.
    pub fn cancel_delete(&mut self) {
        self.pending_deletion = None;
    }

    /// Disarms the marker and hands back the delete to perform.
    pub fn confirm_delete(&mut self) -> Option<DeleteCommand> {
        self.pending_deletion.take().map(|id| DeleteCommand { id })
    }

    /// Applies the result of a [`DeleteCommand`].
    pub fn apply_delete(
        &mut self,
        id: UserId,
        result: Result<(), String>,
    ) -> Feedback {
        match result {
            Ok(()) => {
                self.records.retain(|record| record.id != id);
                if self.editing.as_ref().is_some_and(|s| s.id == id) {
                    self.editing = None;
                }
                self.bump();
                info!("user {} deleted", id);
                Feedback::success("User deleted successfully")
            }
            Err(err) => {
                warn!("delete of user {} failed: {}", id, err);
                Feedback::error("Failed to delete user")
            }
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.view
            .refresh(&self.records, self.revision, &self.search, self.sort);
    }
}

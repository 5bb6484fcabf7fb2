//! Client-side projection of the current page: search filter, sort and the
//! memo that keeps the projection in step with its inputs.

/// Search term matching.
pub mod filtering;
/// Record ordering.
pub mod sorting;
/// Sort keys offered to the user.
pub mod types;
pub mod view;

pub use filtering::matches_search;
pub use sorting::{compare_records, compare_text, sort_records};
pub use types::{SortField, SortKey, SortOrder};
pub use view::{DerivedView, derive_view};

#[cfg(test)]
mod properties;

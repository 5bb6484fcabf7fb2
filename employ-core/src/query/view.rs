//! Derived roster view and its memo.

use employ_model::UserRecord;
use log::trace;

use super::filtering::matches_search;
use super::sorting::sort_records;
use super::types::SortKey;

/// Filter, then stable-sort, the records of the current page.
///
/// Without a sort key the server order is kept.
pub fn derive_view(
    records: &[UserRecord],
    search: &str,
    sort: Option<SortKey>,
) -> Vec<UserRecord> {
    let mut result: Vec<UserRecord> = records
        .iter()
        .filter(|record| matches_search(record, search))
        .cloned()
        .collect();

    if let Some(key) = sort {
        sort_records(&mut result, key);
    }
    result
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewInputs {
    revision: u64,
    search: String,
    sort: Option<SortKey>,
}

/// Memoized projection of the roster.
///
/// Recomputed only when the record revision, search term or sort key
/// differ from the inputs of the cached result.
#[derive(Debug, Clone, Default)]
pub struct DerivedView {
    inputs: Option<ViewInputs>,
    records: Vec<UserRecord>,
    recomputations: u64,
}

impl DerivedView {
    /// Brings the cached projection up to date. Returns `true` when it had
    /// to be recomputed.
    pub fn refresh(
        &mut self,
        source: &[UserRecord],
        revision: u64,
        search: &str,
        sort: Option<SortKey>,
    ) -> bool {
        if let Some(inputs) = &self.inputs
            && inputs.revision == revision
            && inputs.search == search
            && inputs.sort == sort
        {
            return false;
        }

        self.records = derive_view(source, search, sort);
        self.inputs = Some(ViewInputs {
            revision,
            search: search.to_string(),
            sort,
        });
        self.recomputations += 1;
        trace!(
            "derived view recomputed: {} of {} records",
            self.records.len(),
            source.len()
        );
        true
    }

    /// Records of the last refresh, in display order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of times the projection was rebuilt.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// "0 users found", "1 user found", "6 users found".
    pub fn summary(&self) -> String {
        let count = self.records.len();
        let plural = if count == 1 { "" } else { "s" };
        format!("{count} user{plural} found")
    }
}

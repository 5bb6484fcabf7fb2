/// Handle for one page request. Only the most recently issued ticket may
/// apply its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    /// Issue order; higher is newer.
    pub seq: u64,
    /// Page requested.
    pub page: u32,
}

/// What happened to a page response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Records and page count were replaced.
    Applied,
    /// Records were kept and the error recorded.
    Failed,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub(crate) struct FetchSequencer {
    latest: u64,
}

impl FetchSequencer {
    pub(crate) fn issue(&mut self, page: u32) -> FetchTicket {
        self.latest += 1;
        FetchTicket {
            seq: self.latest,
            page,
        }
    }

    pub(crate) fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.latest
    }
}

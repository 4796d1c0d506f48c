//! Search screen state: query, flattened hits, and surfaced failures.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::error::ApiError;
use crate::net::types::SearchHit;

/// State for the research dashboard's search flow.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub hits: Vec<SearchHit>,
    pub loading: bool,
    /// Last failure, shown in a banner above whatever hits were already
    /// rendered.
    pub error: Option<String>,
    /// Whether any search has settled; distinguishes "not searched yet" from
    /// an empty result set.
    pub searched: bool,
    /// Monotonic submit counter; settles carrying an older value are stale.
    pub request_seq: u64,
}

impl SearchState {
    /// A submit is allowed for a non-blank query with no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.query.trim().is_empty() && !self.loading
    }

    /// Enter the loading state and return the sequence number guarding this
    /// request.
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.request_seq += 1;
        self.request_seq
    }

    pub fn settle_ok(&mut self, seq: u64, hits: Vec<SearchHit>) {
        if seq != self.request_seq {
            return;
        }
        self.hits = hits;
        self.loading = false;
        self.searched = true;
    }

    /// Keep previously rendered hits; the banner communicates the failure.
    pub fn settle_err(&mut self, seq: u64, error: &ApiError) {
        if seq != self.request_seq {
            return;
        }
        self.error = Some(error.to_string());
        self.loading = false;
        self.searched = true;
    }
}

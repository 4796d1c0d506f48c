//! Ingestion inventory state: stored documents and their pipeline status.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::error::ApiError;
use crate::net::types::DocumentSummary;

/// State for the stored-document list on the ingestion screen.
#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    pub items: Vec<DocumentSummary>,
    pub loading: bool,
    pub error: Option<String>,
    /// Monotonic refresh counter; settles carrying an older value are stale.
    pub request_seq: u64,
}

impl DocumentsState {
    /// Enter the loading state and return the sequence number guarding this
    /// refresh.
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.request_seq += 1;
        self.request_seq
    }

    pub fn settle_ok(&mut self, seq: u64, items: Vec<DocumentSummary>) {
        if seq != self.request_seq {
            return;
        }
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn settle_err(&mut self, seq: u64, error: &ApiError) {
        if seq != self.request_seq {
            return;
        }
        self.error = Some(error.to_string());
        self.loading = false;
    }

    /// True while any document is still moving through the pipeline; drives
    /// the refresh poll.
    pub fn has_pending(&self) -> bool {
        self.items
            .iter()
            .any(|doc| matches!(doc.status.as_str(), "uploaded" | "processing"))
    }
}

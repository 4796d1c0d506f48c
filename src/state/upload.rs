//! Upload lifecycle state for the ingestion screen.
//!
//! DESIGN
//! ======
//! The status enum is the submit guard: a submit is refused while a request
//! is in flight, and settles are sequence-checked so a response that
//! outlived its screen (or was superseded) cannot clobber newer state.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::error::ApiError;

/// Upload request lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    /// Submit button label for this status.
    pub fn button_label(self) -> &'static str {
        if self == Self::Uploading { "Uploading..." } else { "Upload PDF" }
    }
}

/// State for the upload card.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    /// Name of the currently selected file, if any.
    pub file_name: Option<String>,
    pub status: UploadStatus,
    /// User-facing outcome message for the last settled request.
    pub message: String,
    /// Monotonic submit counter; settles carrying an older value are stale.
    pub request_seq: u64,
}

impl UploadState {
    /// Record a newly selected file and reset any previous outcome.
    pub fn select_file(&mut self, name: String) {
        self.file_name = Some(name);
        self.status = UploadStatus::Idle;
        self.message.clear();
    }

    /// A submit is allowed with a file selected and no request in flight.
    pub fn can_submit(&self) -> bool {
        self.file_name.is_some() && self.status != UploadStatus::Uploading
    }

    /// Enter `Uploading` and return the sequence number guarding this
    /// request.
    pub fn begin(&mut self) -> u64 {
        self.status = UploadStatus::Uploading;
        self.message.clear();
        self.request_seq += 1;
        self.request_seq
    }

    pub fn settle_ok(&mut self, seq: u64, filename: &str) {
        if seq != self.request_seq {
            return;
        }
        self.status = UploadStatus::Success;
        self.message = format!("Uploaded: {filename}");
    }

    pub fn settle_err(&mut self, seq: u64, error: &ApiError) {
        if seq != self.request_seq {
            return;
        }
        self.status = UploadStatus::Error;
        self.message = format!("Upload failed: {error}");
    }
}

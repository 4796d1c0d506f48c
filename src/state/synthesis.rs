//! Synthesis screen state: term selection and the report request machine.
//!
//! DESIGN
//! ======
//! Settling maintains the exactly-one-of rule: once loading clears, either a
//! report or an error is present, never both.

#[cfg(test)]
#[path = "synthesis_test.rs"]
mod synthesis_test;

use crate::net::error::ApiError;
use crate::net::types::SynthesisReport;

/// Preset analysis concepts offered as one-click chips.
pub const PRESET_TERMS: [&str; 6] = ["Marga", "Raagas", "Taala", "Prabandha", "Desi", "Vaadya"];

/// State for the synthesis screen.
#[derive(Clone, Debug)]
pub struct SynthesisState {
    /// Active analysis term, set from a preset chip or free text. Submits
    /// are not gated on it being non-empty; the backend answers empty terms
    /// with its own error.
    pub term: String,
    pub report: Option<SynthesisReport>,
    pub loading: bool,
    pub error: Option<String>,
    /// Monotonic submit counter; settles carrying an older value are stale.
    pub request_seq: u64,
}

impl Default for SynthesisState {
    fn default() -> Self {
        Self {
            term: "Marga".to_owned(),
            report: None,
            loading: false,
            error: None,
            request_seq: 0,
        }
    }
}

impl SynthesisState {
    /// A submit is allowed whenever no request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Enter the loading state and return the sequence number guarding this
    /// request.
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.request_seq += 1;
        self.request_seq
    }

    pub fn settle_ok(&mut self, seq: u64, report: SynthesisReport) {
        if seq != self.request_seq {
            return;
        }
        self.report = Some(report);
        self.error = None;
        self.loading = false;
    }

    pub fn settle_err(&mut self, seq: u64, error: &ApiError) {
        if seq != self.request_seq {
            return;
        }
        self.report = None;
        self.error = Some(error.to_string());
        self.loading = false;
    }
}

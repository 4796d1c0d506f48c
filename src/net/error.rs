//! Error taxonomy for backend requests.
//!
//! DESIGN
//! ======
//! One enum spans transport failures, non-2xx responses, and schema
//! mismatches so every screen surfaces failures through the same
//! user-visible path instead of choosing a per-call policy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network failure or a body that could not be read as JSON.
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx response; `detail` carries the server's message when present.
    #[error("{detail}")]
    Status { status: u16, detail: String },
    /// A 2xx response whose body did not match the documented schema.
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema and its
//! normalizations, and `error` is the shared failure taxonomy.

pub mod api;
pub mod error;
pub mod types;

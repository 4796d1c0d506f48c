//! Page modules for the shell's top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen's state and request orchestration and delegates
//! repeated rendering details to `components`.

pub mod dashboard;
pub mod ingestion;
pub mod synthesis;

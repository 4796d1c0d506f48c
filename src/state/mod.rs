//! Screen-scoped state structs and their transitions.
//!
//! DESIGN
//! ======
//! Each screen owns one plain state struct, created inside the page
//! component so that switching tabs drops and resets it. Transition methods
//! keep the request-lifecycle rules (submit guards, stale-response
//! discarding) testable without a browser.

pub mod documents;
pub mod search;
pub mod synthesis;
pub mod ui;
pub mod upload;

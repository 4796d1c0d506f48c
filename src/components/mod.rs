//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render repeated presentation pieces; pages own the state they
//! read and pass it down as props.

pub mod decade_card;
pub mod document_list;
pub mod result_card;

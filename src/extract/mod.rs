//! Field extraction from free-text command messages.
//!
//! This module turns the message following a command keyword into candidate
//! field values. The four extractions operate on the same message string
//! independently; none consumes tokens from another, so a numeric run used
//! by the name or birthday scan may still appear inside a phone match.

pub mod fields;

pub use fields::{
    extract_birthday, extract_emails, extract_fields, extract_name, extract_phones,
    ExtractedFields,
};

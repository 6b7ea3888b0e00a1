//! Candidate field scanners and their tie-break policies.
//!
//! Each scanner implements one explicit policy:
//!
//! - **name**: left-to-right token walk, stop at the first numeric token;
//! - **phones**: whole-string pattern scan over the normalized message;
//! - **birthday**: reverse token scan without early exit, so the earliest
//!   8-digit token in original order is assigned last and wins;
//! - **emails**: whole-string pattern scan, order of appearance.

use crate::domain::{is_all_digits, normalize};
use once_cell::sync::Lazy;
use regex::Regex;

/// Phone scan pattern: optional `+CC` prefix, a 3-4 digit group, then two
/// 3-digit groups, with at most one non-digit between groups. Applied to the
/// normalized message, so separator characters never split a number.
static PHONE_SCAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+\d{2})?\d{3,4}\D?\d{3}\D?\d{3}").expect("phone scan is valid"));

/// Email scan pattern: local part starting with a letter, domain label and
/// TLD of at least two alphabetic characters each.
static EMAIL_SCAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z][\w.]+@[a-zA-Z]{2,}\.[a-zA-Z]{2,}").expect("email scan is valid")
});

/// All candidate fields extracted from one message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedFields {
    /// Candidate contact name; `None` when the message has no tokens
    pub name: Option<String>,

    /// Candidate phone numbers, in match order
    pub phones: Vec<String>,

    /// Candidate 8-digit birthday
    pub birthday: Option<String>,

    /// Candidate email addresses, in order of appearance
    pub emails: Vec<String>,
}

/// Run all four scanners over the same message.
pub fn extract_fields(message: &str) -> ExtractedFields {
    ExtractedFields {
        name: extract_name(message),
        phones: extract_phones(message),
        birthday: extract_birthday(message),
        emails: extract_emails(message),
    }
}

/// Extract the candidate name from a message.
///
/// Tokens are consumed left to right and joined with single spaces; the walk
/// stops at the first token that is purely numeric after normalization, so a
/// name is never purely numeric. Returns `None` when the message has no
/// tokens at all, and `Some("")` when the very first token is numeric.
pub fn extract_name(message: &str) -> Option<String> {
    let tokens: Vec<&str> = message.split_whitespace().collect();

    if tokens.is_empty() {
        return None;
    }

    let mut name_tokens = Vec::new();

    for token in tokens {
        if is_all_digits(&normalize(token)) {
            break;
        }
        name_tokens.push(token);
    }

    Some(name_tokens.join(" "))
}

/// Extract every candidate phone number from a message.
///
/// The whole message is normalized first, then scanned for all
/// non-overlapping matches of the phone pattern. This is a whole-string
/// scan, not a token walk: a number may span what were separator-joined
/// tokens in the raw input.
pub fn extract_phones(message: &str) -> Vec<String> {
    let cleared = normalize(message);

    PHONE_SCAN
        .find_iter(&cleared)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract the candidate birthday from a message.
///
/// Tokens are scanned in reverse order with no early exit; every normalized
/// 8-digit all-numeric token overwrites the previous candidate, so the final
/// assignment comes from the earliest-position token in the original order.
/// When several 8-digit runs exist, the leftmost one wins.
pub fn extract_birthday(message: &str) -> Option<String> {
    let mut birthday = None;

    for token in message.split_whitespace().rev() {
        let cleared = normalize(token);
        if cleared.len() == 8 && is_all_digits(&cleared) {
            birthday = Some(cleared);
        }
    }

    birthday
}

/// Extract every candidate email address, in order of appearance.
pub fn extract_emails(message: &str) -> Vec<String> {
    EMAIL_SCAN
        .find_iter(message)
        .map(|m| m.as_str().to_string())
        .collect()
}

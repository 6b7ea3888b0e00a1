//! Integration tests for the field-extraction pipeline.
//!
//! These pin down the tie-break policies: stop-at-first-numeric-token for
//! names, whole-string scans for phones and emails, and the reverse-scan
//! last-write-wins rule for birthdays.

use phonebook_cli::extract;

#[test]
fn test_name_stops_at_first_numeric_token() {
    let fields = extract::extract_fields("Bill 0501234567");

    assert_eq!(fields.name.as_deref(), Some("Bill"));
    assert_eq!(fields.phones, vec!["0501234567".to_string()]);
}

#[test]
fn test_multi_word_name_joined_with_single_spaces() {
    let fields = extract::extract_fields("Anna   Maria  Jones 0501234567");
    assert_eq!(fields.name.as_deref(), Some("Anna Maria Jones"));
}

#[test]
fn test_name_absent_when_message_empty() {
    assert_eq!(extract::extract_name(""), None);
}

#[test]
fn test_birthday_picks_leftmost_of_two_eight_digit_runs() {
    // Two distinct 8-digit runs: the reverse scan has no early exit, so the
    // earliest-position token is assigned last and wins.
    let fields = extract::extract_fields("Serj 11091983 24061990");
    assert_eq!(fields.birthday.as_deref(), Some("11091983"));
}

#[test]
fn test_birthday_found_through_separators() {
    let fields = extract::extract_fields("Serj 0501234567 11-09-1983");
    assert_eq!(fields.birthday.as_deref(), Some("11091983"));
}

#[test]
fn test_phone_scan_spans_separator_joined_input() {
    let fields = extract::extract_fields("Serj +38-050-123-45-67");
    assert_eq!(fields.phones, vec!["+380501234567".to_string()]);
}

#[test]
fn test_phone_scan_returns_every_match() {
    let fields = extract::extract_fields("Serj 0501234567 0679876543");
    assert_eq!(fields.phones.len(), 2);
}

#[test]
fn test_email_scan_keeps_order_of_appearance() {
    let fields =
        extract::extract_fields("Serj 0501234567 serj@example.com backup serj@mail.org");
    assert_eq!(
        fields.emails,
        vec!["serj@example.com".to_string(), "serj@mail.org".to_string()]
    );
}

#[test]
fn test_scans_do_not_consume_from_each_other() {
    // The 8-digit birthday token is part of no phone match here, but the
    // phone scan still sees the whole message, and the name walk stopped
    // long before either.
    let fields = extract::extract_fields("Bill Gates 0501234567 11091983 bill@example.com");

    assert_eq!(fields.name.as_deref(), Some("Bill Gates"));
    assert_eq!(fields.phones, vec!["0501234567".to_string()]);
    assert_eq!(fields.birthday.as_deref(), Some("11091983"));
    assert_eq!(fields.emails, vec!["bill@example.com".to_string()]);
}

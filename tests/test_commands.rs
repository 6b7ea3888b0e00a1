//! End-to-end tests for the command handlers over a live address book.

use chrono::NaiveDate;
use phonebook_cli::commands::{self, Outcome};
use phonebook_cli::error::CommandError;
use phonebook_cli::{AddressBook, Record};

fn accept(_: &Record) -> bool {
    true
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_contact_lifecycle() {
    let mut book = AddressBook::new();

    // CREATE
    let outcome = commands::add(&mut book, "Serj 0501234567 11091983", accept).unwrap();
    assert_eq!(outcome, Outcome::Updated("Serj".to_string()));
    assert_eq!(book.len(), 1);

    // READ
    let outcome = commands::phones(&book, "Serj").unwrap();
    assert_eq!(outcome, Outcome::Output("Serj: 0501234567".to_string()));

    // UPDATE
    commands::change(&mut book, "Serj 0501234567 0679876543").unwrap();
    assert_eq!(
        book.get("Serj").unwrap().phones()[0].as_str(),
        "0679876543"
    );

    // DELETE
    commands::delete(&mut book, "Serj").unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_add_fails_without_phone_candidates() {
    let mut book = AddressBook::new();

    let err = commands::add(&mut book, "Bill Gates", accept).unwrap_err();
    assert!(matches!(err, CommandError::MissingField("phone")));
    assert!(book.is_empty());
}

#[test]
fn test_add_merge_asks_before_changing() {
    let mut book = AddressBook::new();
    commands::add(&mut book, "Bill 0501234567", accept).unwrap();

    let mut asked = false;
    let outcome = commands::add(&mut book, "Bill 0679876543", |record| {
        asked = true;
        assert_eq!(record.name().as_str(), "Bill");
        false
    })
    .unwrap();

    assert!(asked);
    assert!(matches!(outcome, Outcome::Output(_)));
    assert_eq!(book.get("Bill").unwrap().phones().len(), 1);
}

#[test]
fn test_add_rejects_duplicate_phone_before_asking() {
    let mut book = AddressBook::new();
    commands::add(&mut book, "Bill 0501234567", accept).unwrap();

    let err = commands::add(&mut book, "Bill 0501234567", |_| {
        panic!("must not ask when a phone is duplicated");
    })
    .unwrap_err();

    assert!(matches!(err, CommandError::DuplicateValue(_)));
}

#[test]
fn test_change_with_unknown_contact() {
    let mut book = AddressBook::new();
    let err = commands::change(&mut book, "Bill 0501234567 0679876543").unwrap_err();
    assert!(matches!(err, CommandError::NotFound(_)));
}

#[test]
fn test_change_keeps_record_when_old_phone_absent() {
    let mut book = AddressBook::new();
    commands::add(&mut book, "Bill 0501234567", accept).unwrap();

    commands::change(&mut book, "Bill 0441112223 0679876543").unwrap();

    let record = book.get("Bill").unwrap();
    assert_eq!(record.phones().len(), 1);
    assert_eq!(record.phones()[0].as_str(), "0501234567");
}

#[test]
fn test_birthday_flow() {
    let mut book = AddressBook::new();
    commands::add(&mut book, "Serj 0501234567", accept).unwrap();

    // Countdown before a birthday exists is a domain error.
    let err = commands::birthday_countdown(&book, "Serj", date(2026, 9, 1)).unwrap_err();
    assert!(matches!(err, CommandError::NoBirthdaySet(_)));

    commands::add_birthday(&mut book, "Serj 11091983").unwrap();

    let outcome = commands::birthday_countdown(&book, "Serj", date(2026, 9, 11)).unwrap();
    assert_eq!(
        outcome,
        Outcome::Output("Today is Serj's birthday.".to_string())
    );

    let outcome = commands::birthday_countdown(&book, "Serj", date(2026, 12, 31)).unwrap();
    assert_eq!(
        outcome,
        Outcome::Output("There are 254 days left until Serj's birthday.".to_string())
    );
}

#[test]
fn test_add_birthday_rejects_impossible_date() {
    let mut book = AddressBook::new();
    commands::add(&mut book, "Serj 0501234567", accept).unwrap();

    let err = commands::add_birthday(&mut book, "Serj 31021999").unwrap_err();
    assert!(matches!(err, CommandError::InvalidFormat(_)));
}

#[test]
fn test_find_across_fields() {
    let mut book = AddressBook::new();
    commands::add(&mut book, "Bill 0501234567 bill@example.com", accept).unwrap();
    commands::add(&mut book, "Serj 0679876543", accept).unwrap();

    // By name fragment, case-insensitive.
    let Outcome::Output(by_name) = commands::find(&book, "SER").unwrap() else {
        panic!("expected output");
    };
    assert!(by_name.contains("Serj"));
    assert!(!by_name.contains("Bill"));

    // By email fragment.
    let Outcome::Output(by_email) = commands::find(&book, "example.com").unwrap() else {
        panic!("expected output");
    };
    assert!(by_email.contains("Bill"));

    // No match.
    let Outcome::Output(none) = commands::find(&book, "zzz").unwrap() else {
        panic!("expected output");
    };
    assert_eq!(none, "Nothing was found according to your request.");
}

#[test]
fn test_parse_and_dispatch_keywords() {
    let (keyword, message) = commands::parse_input("Add Birth Serj 11091983");
    assert_eq!(keyword, "add birth");
    assert_eq!(message, "Serj 11091983");

    let (keyword, message) = commands::parse_input("show all");
    assert_eq!(keyword, "show all");
    assert_eq!(message, "");

    let (keyword, _) = commands::parse_input("birthdays");
    assert_eq!(keyword, "birthdays");
}

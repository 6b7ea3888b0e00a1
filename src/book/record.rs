//! Record model aggregating one contact's validated fields.

use crate::domain::{normalize, Birthday, Email, Name, Phone};
use crate::error::{CommandError, CommandResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// The validated data for one contact.
///
/// A Record has one immutable Name, an ordered sequence of phones, an
/// optional birthday, and an ordered sequence of emails. The `add` flow
/// guarantees a record always has at least one phone when first created.
///
/// Uniqueness of phones and emails is a caller concern: the command layer
/// probes with [`has_phone`](Record::has_phone) / [`has_email`](Record::has_email)
/// before mutating, and the mutators append unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
    emails: Vec<Email>,
}

impl Record {
    /// Create a record with no fields beyond the name.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            emails: Vec::new(),
        }
    }

    /// The contact name. Immutable after creation.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Stored phones, in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The stored birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Stored emails, in the order they were added.
    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    /// Append phones. The caller pre-checks uniqueness.
    pub fn add_phones(&mut self, phones: Vec<Phone>) {
        self.phones.extend(phones);
    }

    /// Append an email. The caller pre-checks uniqueness.
    pub fn add_email(&mut self, email: Email) {
        self.emails.push(email);
    }

    /// Set or overwrite the birthday unconditionally.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Replace the phone at `index` with `new_phone`.
    ///
    /// The index comes from scanning the current phones for one equal to a
    /// target old value. An out-of-range index is a silent no-op, not an
    /// error.
    pub fn change_phone(&mut self, index: usize, new_phone: Phone) {
        if let Some(slot) = self.phones.get_mut(index) {
            *slot = new_phone;
        }
    }

    /// Position of the stored phone equal to `target` after normalization.
    pub fn position_of_phone(&self, target: &str) -> Option<usize> {
        let cleared = normalize(target);
        self.phones.iter().position(|p| p.normalized() == cleared)
    }

    /// Whether a phone equal to `candidate` (after normalization) is stored.
    pub fn has_phone(&self, candidate: &str) -> bool {
        self.position_of_phone(candidate).is_some()
    }

    /// Whether an email exactly equal to `candidate` is stored.
    pub fn has_email(&self, candidate: &str) -> bool {
        self.emails.iter().any(|e| e.as_str() == candidate)
    }

    /// Days from `today` until the next occurrence of the stored birthday.
    ///
    /// Returns 0 when `today` is the birthday; rolls over to next year when
    /// this year's date has already passed. A Feb 29 birthday is observed on
    /// Mar 1 in non-leap years.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::NoBirthdaySet` if the record has no birthday;
    /// callers are expected to check for presence first.
    pub fn days_until_birthday(&self, today: NaiveDate) -> CommandResult<i64> {
        let birthday = self
            .birthday
            .ok_or_else(|| CommandError::NoBirthdaySet(self.name.as_str().to_string()))?;

        let this_year = occurrence_in(today.year(), birthday.month(), birthday.day());

        let next = if this_year < today {
            occurrence_in(today.year() + 1, birthday.month(), birthday.day())
        } else {
            this_year
        };

        Ok((next - today).num_days())
    }

    /// Days until the next birthday, measured from the local clock.
    pub fn days_to_birthday(&self) -> CommandResult<i64> {
        self.days_until_birthday(Local::now().date_naive())
    }
}

/// The occurrence of a month/day pair in `year`. Feb 29 falls back to Mar 1
/// when `year` is not a leap year.
fn occurrence_in(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1st exists in every year")
    })
}

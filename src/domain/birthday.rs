//! Birthday value object.

use super::errors::ValidationError;
use super::normalize::is_all_digits;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for birthdays.
///
/// Accepts an 8-character all-digit string in `DDMMYYYY` order and stores it
/// as a calendar date. The date must be a real calendar date: `31021999` is
/// rejected even though it has the right digit count.
///
/// Displayed (and serialized) as the original 8-digit string, never
/// reformatted.
///
/// # Example
///
/// ```
/// use phonebook_cli::domain::Birthday;
///
/// let birth = Birthday::new("11091983").unwrap();
/// assert_eq!(birth.to_string(), "11091983");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from an 8-digit `DDMMYYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not
    /// exactly 8 digits or does not name a real calendar date.
    pub fn new(birth: impl Into<String>) -> Result<Self, ValidationError> {
        let birth = birth.into();

        if birth.len() != 8 || !is_all_digits(&birth) {
            return Err(ValidationError::InvalidBirthday(birth));
        }

        let date = NaiveDate::parse_from_str(&birth, "%d%m%Y")
            .map_err(|_| ValidationError::InvalidBirthday(birth))?;

        Ok(Self(date))
    }

    /// The stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Birth month (1-12).
    pub fn month(&self) -> u32 {
        use chrono::Datelike;
        self.0.month()
    }

    /// Birth day of month (1-31).
    pub fn day(&self) -> u32 {
        use chrono::Datelike;
        self.0.day()
    }
}

// Serde support - serialize as the 8-digit string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - DDMMYYYY, as entered
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d%m%Y"))
    }
}

//! Phone value object.

use super::errors::ValidationError;
use super::normalize::normalize;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Anchored form of the phone pattern: an optional `+CC` country-code prefix,
/// a 3-4 digit area/exchange group, then two 3-digit groups, each pair of
/// groups optionally split by a single non-digit.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+\d{2})?\d{3,4}\D?\d{3}\D?\d{3}$").expect("phone pattern is valid")
});

/// A type-safe wrapper for phone numbers.
///
/// A Phone is only constructed from a string that, after separator
/// normalization, fully matches the phone pattern. Length is pattern-based,
/// not a fixed digit count: 3-4 digit area/exchange groups with an optional
/// country-code prefix are all accepted.
///
/// # Example
///
/// ```
/// use phonebook_cli::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the string does not match
    /// the phone pattern after normalization.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_PATTERN.is_match(&normalize(&phone)) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The separator-normalized form, used for format-insensitive comparison.
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }

    /// Whether this phone equals `other` after separator normalization.
    pub fn matches(&self, other: &str) -> bool {
        self.normalized() == normalize(other)
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("no digits").is_err());
        assert!(Phone::new("0501234567").is_ok());
        assert!(Phone::new("+380501234567").is_ok());
        assert!(Phone::new("+38-050-123-45-67").is_ok());
        assert!(Phone::new("123456789").is_ok());
        assert!(Phone::new("12345").is_err());
        assert!(Phone::new("05012345678901").is_err());
    }

    #[test]
    fn test_phone_normalized() {
        let phone = Phone::new("+38-050-123-45-67").unwrap();
        assert_eq!(phone.normalized(), "+380501234567");
    }

    #[test]
    fn test_phone_matches_format_insensitive() {
        let phone = Phone::new("+380501234567").unwrap();
        assert!(phone.matches("+38-050-123-45-67"));
        assert!(!phone.matches("0501234567"));
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(format!("{}", phone), "0501234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("0501234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0501234567\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}

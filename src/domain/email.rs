//! Email value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Anchored form of the email pattern: a local part starting with a letter,
/// a domain label of at least two alphabetic characters, and a TLD of at
/// least two alphabetic characters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][\w.]+@[a-zA-Z]{2,}\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// A type-safe wrapper for email addresses.
///
/// Equality is case-sensitive and exact; two emails differing only in case
/// are distinct values.
///
/// # Example
///
/// ```
/// use phonebook_cli::domain::Email;
///
/// let email = Email::new("serj@example.com").unwrap();
/// assert_eq!(email.as_str(), "serj@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the string does not match
    /// the email pattern.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !EMAIL_PATTERN.is_match(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = Email::new("serj@example.com").unwrap();
        assert_eq!(email.as_str(), "serj@example.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(Email::new("invalid").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("serj@").is_err());
        assert!(Email::new("1serj@example.com").is_err());
        assert!(Email::new("serj@e.com").is_err());
        assert!(Email::new("serj@example.c").is_err());
        assert!(Email::new("serj.work@example.com").is_ok());
    }

    #[test]
    fn test_email_equality_case_sensitive() {
        let lower = Email::new("serj@example.com").unwrap();
        let upper = Email::new("Serj@example.com").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_email_display() {
        let email = Email::new("serj@example.com").unwrap();
        assert_eq!(format!("{}", email), "serj@example.com");
    }

    #[test]
    fn test_email_serialization() {
        let email = Email::new("serj@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"serj@example.com\"");
    }

    #[test]
    fn test_email_deserialization_invalid_fails() {
        let result: Result<Email, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}

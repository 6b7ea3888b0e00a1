//! Error types for the phonebook CLI.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors surfaced by command operations for the REPL boundary to translate
/// into user messages.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A required field was absent from the extracted input
    #[error("No {0} found in the message")]
    MissingField(&'static str),

    /// A field failed its validator
    #[error(transparent)]
    InvalidFormat(#[from] ValidationError),

    /// The referenced contact is not in the address book
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The value is already stored on the target record
    #[error("Already stored for this contact: {0}")]
    DuplicateValue(String),

    /// A birthday countdown was requested for a record with no birthday
    #[error("No birthday set for contact: {0}")]
    NoBirthdaySet(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while reading or writing the on-disk address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the database file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding the address book failed
    #[error("Codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::MissingField("phone");
        assert_eq!(err.to_string(), "No phone found in the message");

        let err = CommandError::NotFound("Serj".to_string());
        assert_eq!(err.to_string(), "Contact not found: Serj");

        let err = ConfigError::InvalidValue {
            var: "PHONEBOOK_PAGE_SIZE".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert!(err.to_string().contains("PHONEBOOK_PAGE_SIZE"));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: CommandError = ValidationError::EmptyName.into();
        assert!(matches!(err, CommandError::InvalidFormat(_)));
        assert_eq!(err.to_string(), "Name cannot be empty");
    }
}

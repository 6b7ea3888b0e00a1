//! Phonebook CLI - an interactive console contact manager.
//!
//! Stores named records (name, phone numbers, birthday, emails), persists
//! them to a binary file, and offers free-text commands to add, change,
//! delete, search, and list contacts, plus a week-of-birthdays report.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for the contact fields
//! - **extract**: free-text message to candidate field values
//! - **book**: Record and the insertion-ordered AddressBook
//! - **storage**: binary persistence with safe defaulting
//! - **commands**: command handlers over the book
//! - **report**: week-of-birthdays bucketing
//! - **config**: configuration from environment variables
//! - **repl**: the interactive command loop

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod repl;
pub mod report;
pub mod storage;

pub use book::{AddressBook, Record, RecordCursor, RecordView};
pub use commands::Outcome;
pub use config::Config;
pub use domain::{Birthday, Email, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use extract::ExtractedFields;
pub use report::WeekReport;

//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the contact fields: names,
//! phone numbers, birthdays, and email addresses. These value objects
//! provide validation at construction time and prevent invalid data from
//! being represented in the system, plus the separator normalization shared
//! by the digit-based validators and the extraction pipeline.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod name;
pub mod normalize;
pub mod phone;

pub use birthday::Birthday;
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use normalize::{is_all_digits, normalize};
pub use phone::Phone;

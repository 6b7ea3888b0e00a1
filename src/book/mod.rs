//! Address book data model.
//!
//! [`Record`] aggregates one contact's validated fields; [`AddressBook`] is
//! the keyed, insertion-ordered container of records with a resumable
//! cursor for paginated display.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, RecordCursor, RecordView};
pub use record::Record;

//! Command operations over the address book.
//!
//! Each handler receives the message following its command keyword, takes
//! the [`AddressBook`](crate::book::AddressBook) explicitly, and returns a
//! [`CommandResult`](crate::error::CommandResult) with an [`Outcome`]; the
//! REPL boundary translates error kinds into user messages. Handlers never
//! print.

pub mod handlers;
pub mod parser;

pub use handlers::{
    add, add_birthday, birthday_countdown, change, delete, find, phones, render_record,
    week_report, Outcome,
};
pub use parser::{parse_input, COMMAND_KEYWORDS};

//! Binary persistence for the address book.
//!
//! The whole book is serialized with bincode into a single file. Failures
//! are converted to values at this boundary: `save` returns a descriptive
//! message instead of an error, and `load` falls back to an empty book on a
//! missing, empty, or corrupt file (the expected first-run state).

use crate::book::AddressBook;
use crate::error::StorageResult;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Serialize the address book to `path`, overwriting any existing file.
///
/// Returns a confirmation message on success or a description of the
/// failure. This is the one place failures become values instead of
/// propagating.
pub fn save(path: &Path, book: &AddressBook) -> String {
    match try_save(path, book) {
        Ok(()) => "Phonebook saved.".to_string(),
        Err(err) => format!("Failed to save phonebook: {}", err),
    }
}

/// Deserialize the address book from `path`.
///
/// A missing file, an empty file, or a file that fails to decode all yield
/// a freshly-constructed empty book; this function never fails.
pub fn load(path: &Path) -> AddressBook {
    match try_load(path) {
        Ok(book) => book,
        Err(err) => {
            if path.exists() {
                warn!("Could not read phonebook from {}: {}", path.display(), err);
            } else {
                debug!("No phonebook at {}, starting empty", path.display());
            }
            AddressBook::new()
        }
    }
}

fn try_save(path: &Path, book: &AddressBook) -> StorageResult<()> {
    let bytes = bincode::serialize(book)?;
    fs::write(path, bytes)?;
    Ok(())
}

fn try_load(path: &Path) -> StorageResult<AddressBook> {
    let bytes = fs::read(path)?;

    if bytes.is_empty() {
        return Ok(AddressBook::new());
    }

    Ok(bincode::deserialize(&bytes)?)
}

//! AddressBook container keyed by contact name.

use super::record::Record;
use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The keyed, ordered container of all Records.
///
/// Keys are unique contact names; iteration follows insertion order.
/// Inserting a record under an existing name replaces that record in place
/// without disturbing its position, so a second "add" never creates a
/// duplicate entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    entries: HashMap<String, Record>,
    order: Vec<String>,
}

/// One record flattened for display: the shape yielded by the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    /// Contact name
    pub name: String,

    /// Stored phones as strings
    pub phones: Vec<String>,

    /// Stored birthday as the 8-digit string, if set
    pub birthday: Option<String>,

    /// Stored emails as strings
    pub emails: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.entries.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.entries.get_mut(name)
    }

    /// Whether a record with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Insert a record keyed by its name.
    ///
    /// A record under a new name is appended; a record under an existing
    /// name replaces the stored one and keeps its original position.
    pub fn insert(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.entries.insert(name.clone(), record).is_none() {
            self.order.push(name);
        }
    }

    /// Remove a record by name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let removed = self.entries.remove(name);
        if removed.is_some() {
            self.order.retain(|n| n != name);
        }
        removed
    }

    /// Iterate `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> + '_ {
        self.order.iter().map(move |name| {
            let record = self.entries.get(name).expect("ordered name has a record");
            (name.as_str(), record)
        })
    }

    /// A restartable cursor over the records in insertion order.
    ///
    /// Yields exactly [`len()`](AddressBook::len) views before exhaustion.
    /// The cursor borrows the book, so it can be driven externally in
    /// page-sized batches: stop after N items, prompt, resume on the same
    /// cursor.
    pub fn records(&self) -> RecordCursor<'_> {
        RecordCursor {
            book: self,
            position: 0,
        }
    }
}

/// Resumable cursor over an [`AddressBook`] in insertion order.
#[derive(Debug)]
pub struct RecordCursor<'a> {
    book: &'a AddressBook,
    position: usize,
}

impl Iterator for RecordCursor<'_> {
    type Item = RecordView;

    fn next(&mut self) -> Option<RecordView> {
        let name = self.book.order.get(self.position)?;
        self.position += 1;

        // order entries are backed by the map
        let record = self
            .book
            .entries
            .get(name)
            .expect("ordered name has a record");

        Some(RecordView::from(record))
    }
}

impl From<&Record> for RecordView {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
            emails: record.emails().iter().map(|e| e.to_string()).collect(),
        }
    }
}

// Serde support - serialize as a sequence of records in insertion order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.order.len()))?;
        for name in &self.order {
            let record = self.entries.get(name).expect("ordered name has a record");
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

// Serde support - deserialize from a sequence of records, rebuilding the
// key index and insertion order
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BookVisitor;

        impl<'de> Visitor<'de> for BookVisitor {
            type Value = AddressBook;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of records")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<AddressBook, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut book = AddressBook::new();
                while let Some(record) = seq.next_element::<Record>()? {
                    book.insert(record);
                }
                Ok(book)
            }
        }

        deserializer.deserialize_seq(BookVisitor)
    }
}

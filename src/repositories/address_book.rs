//! In-memory address book.

use super::traits::ContactRepository;
use crate::models::ContactRecord;
use std::fmt;

/// Shown when rendering an address book with no records.
pub const EMPTY_BOOK: &str = "Address book is empty.";

/// Header line of a non-empty address book rendering.
pub const BOOK_HEADER: &str = "Address Book:";

/// Name-keyed collection of contact records, iterated in insertion order.
///
/// Replacing a record keeps the slot of the record it replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl ContactRepository for AddressBook {
    fn add_record(&mut self, record: ContactRecord) {
        match self.position_of(record.name().as_str()) {
            Some(position) => {
                tracing::debug!(contact = %record.name(), "Replacing contact record");
                self.records[position] = record;
            }
            None => {
                tracing::debug!(contact = %record.name(), "Adding contact record");
                self.records.push(record);
            }
        }
    }

    fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let position = self.position_of(name)?;
        tracing::debug!(contact = name, "Deleting contact record");
        Some(self.records.remove(position))
    }

    fn records(&self) -> Box<dyn Iterator<Item = &ContactRecord> + '_> {
        Box::new(self.records.iter())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "{}", EMPTY_BOOK);
        }

        write!(f, "{}", BOOK_HEADER)?;
        for record in &self.records {
            write!(f, "\n{}", record)?;
        }
        Ok(())
    }
}

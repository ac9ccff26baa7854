//! Keyed collection of contact records.

use super::pages::Pages;
use crate::error::{BookError, BookResult, StorageResult};
use crate::models::Record;
use crate::repositories::{BookRepository, FileBookRepository};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::debug;

/// Records per page when none is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => panic!("default page size must be positive"),
};

/// All contacts, keyed by name, in insertion order.
///
/// The whole book is persisted as a single unit; see
/// [`AddressBook::save_to_file`] and [`AddressBook::read_from_file`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawBook")]
pub struct AddressBook {
    records: Vec<Record>,
    page_size: NonZeroUsize,
}

/// Decoded book before its names are checked for uniqueness.
#[derive(Deserialize)]
struct RawBook {
    records: Vec<Record>,
    page_size: NonZeroUsize,
}

impl TryFrom<RawBook> for AddressBook {
    type Error = String;

    fn try_from(raw: RawBook) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(raw.records.len());
        for record in &raw.records {
            if !seen.insert(record.name().as_str()) {
                return Err(format!("duplicate record name: {}", record.name()));
            }
        }
        Ok(Self {
            records: raw.records,
            page_size: raw.page_size,
        })
    }
}

impl AddressBook {
    /// Create an empty book with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an empty book showing `page_size` records per page.
    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            records: Vec::new(),
            page_size,
        }
    }

    /// Insert a record under its name.
    ///
    /// A record with the same name is replaced in place, keeping its
    /// position in the iteration order.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "Replacing record");
                self.records[index] = record;
            }
            None => {
                debug!(name = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    /// Get the record stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Get the record stored under `name` for editing.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Search the compact rendering of every record.
    ///
    /// Each compact rendering is lower-cased before the containment check;
    /// the query is used as given, so a query with upper-case letters never
    /// matches. Matches are joined by newlines; no match gives empty text.
    pub fn find(&self, query: &str) -> String {
        let matches: Vec<String> = self
            .records
            .iter()
            .map(Record::render_compact)
            .filter(|compact| compact.to_lowercase().contains(query))
            .collect();
        debug!(query, matches = matches.len(), "Searched book");
        matches.join("\n")
    }

    /// Remove the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::NotFound(format!("record {}", name)))?;
        self.records.remove(index);
        debug!(name, "Deleted record");
        Ok(())
    }

    /// Records per page for pagination passes started from now on.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Start a new pagination pass over the current records.
    ///
    /// The pass holds the records as they are now and yields one rendered
    /// page per step. It cannot be restarted; call `pages` again for a new
    /// pass.
    pub fn pages(&self) -> Pages<'_> {
        Pages::new(&self.records, self.page_size)
    }

    /// Full rendering of every record, one per line.
    pub fn render_all(&self) -> String {
        self.to_string()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    /// Write the whole book to `path`, replacing any existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        FileBookRepository::new(path.as_ref()).save(self)
    }

    /// Read a book previously written by [`AddressBook::save_to_file`].
    ///
    /// Any failure (missing file, unreadable or corrupt data) gives `None`,
    /// which callers treat as "start with a fresh book".
    pub fn read_from_file(path: impl AsRef<Path>) -> Option<Self> {
        FileBookRepository::new(path.as_ref()).load()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

//! Paginated traversal of an address book.

use crate::models::Record;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use tracing::debug;

/// A single forward pass over a book, one rendered page at a time.
///
/// The pass borrows the book's records as they were when it started, so the
/// book cannot change until the pass is dropped. Each step renders
/// the next `page_size` records and joins them with newlines. Once the
/// records are exhausted the pass is over for good; start a new one with
/// [`AddressBook::pages`](crate::AddressBook::pages).
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// for name in ["Ann", "Bob", "Cid", "Dee"] {
///     book.add_record(Record::new(name));
/// }
///
/// let mut pages = book.pages();
/// assert_eq!(pages.next().unwrap().lines().count(), 3);
/// assert_eq!(pages.next().unwrap(), "Contact name: Dee, phones: ");
/// assert_eq!(pages.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: &'a [Record],
    cursor: usize,
    page_size: NonZeroUsize,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: &'a [Record], page_size: NonZeroUsize) -> Self {
        Self {
            records,
            cursor: 0,
            page_size,
        }
    }

    /// Number of records already yielded.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.cursor >= self.records.len() {
            return None;
        }

        let end = (self.cursor + self.page_size.get()).min(self.records.len());
        let page = self.records[self.cursor..end]
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        debug!(from = self.cursor, to = end, "Rendered page");
        self.cursor = end;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().saturating_sub(self.cursor);
        let pages = remaining.div_ceil(self.page_size.get());
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}

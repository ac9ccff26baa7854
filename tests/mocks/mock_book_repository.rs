use address_book::error::{StorageError, StorageResult};
use address_book::{AddressBook, BookRepository};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

/// Mock book repository for testing.
///
/// Keeps the stored book in memory, can be told to fail on save, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockBookRepository {
    stored: RefCell<Option<AddressBook>>,
    fail_saves: bool,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new empty MockBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.borrow_mut() = Some(book);
        repo
    }

    /// Create a repository whose saves always fail.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// The book currently stored, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.borrow().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> Option<AddressBook> {
        self.track_call("load");
        self.stored.borrow().clone()
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if self.fail_saves {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }

        *self.stored.borrow_mut() = Some(book.clone());
        Ok(())
    }
}

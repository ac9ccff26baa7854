use crate::book::AddressBook;
use crate::error::StorageResult;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Book repository backed by a single bincode file.
///
/// The file format is private to this repository and carries no version
/// header.
#[derive(Debug, Clone)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the book, reporting why it could not be restored.
    pub fn try_load(&self) -> StorageResult<AddressBook> {
        let bytes = fs::read(&self.path)?;
        let book = bincode::deserialize(&bytes)?;
        Ok(book)
    }
}

impl BookRepository for FileBookRepository {
    fn load(&self) -> Option<AddressBook> {
        match self.try_load() {
            Ok(book) => {
                info!(path = %self.path.display(), records = book.len(), "Loaded address book");
                Some(book)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Could not load address book");
                None
            }
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let bytes = bincode::serialize(book)?;
        fs::write(&self.path, bytes)?;
        info!(path = %self.path.display(), records = book.len(), "Saved address book");
        Ok(())
    }
}

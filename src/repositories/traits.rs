use crate::book::AddressBook;
use crate::error::StorageResult;

/// Repository for persisting the address book.
///
/// The book is stored and restored as one snapshot; there is no partial or
/// incremental persistence.
pub trait BookRepository {
    /// Restore the stored book.
    ///
    /// Returns `None` when nothing usable is stored, whatever the reason.
    fn load(&self) -> Option<AddressBook>;

    /// Store the whole book, replacing any previous snapshot.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}

//! End-to-end test utilities.
//!
//! Helpers for tests that drive the book through real snapshot files in a
//! scratch directory.

use address_book::AddressBook;
use std::path::PathBuf;
use tempfile::TempDir;

pub mod fixtures;

/// A scratch directory holding one book snapshot path.
///
/// The directory is removed when this value is dropped.
#[allow(dead_code)]
pub struct TestStore {
    _dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create scratch directory");
        let path = dir.path().join("book.bin");
        Self { _dir: dir, path }
    }
}

/// Assert that two books render identically.
#[allow(dead_code)]
pub fn assert_same_rendering(actual: &AddressBook, expected: &AddressBook) {
    assert_eq!(
        actual.render_all(),
        expected.render_all(),
        "Book renderings should match"
    );
}

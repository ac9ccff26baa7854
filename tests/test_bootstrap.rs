//! Startup behavior: restoring or seeding the book.

mod e2e;
mod mocks;

use address_book::bootstrap::{load_or_seed, seed_book};
use address_book::{AddressBook, BootstrapError, FileBookRepository, Record};
use e2e::TestStore;
use mocks::MockBookRepository;
use std::num::NonZeroUsize;

fn page_size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn test_first_run_seeds_and_saves() {
    let repo = MockBookRepository::new();

    let book = load_or_seed(&repo, page_size(3)).unwrap();

    assert_eq!(book.len(), 6);
    assert_eq!(repo.get_call_count("load"), 1);
    assert_eq!(repo.get_call_count("save"), 1);
    assert_eq!(repo.stored().unwrap(), seed_book().unwrap());
}

#[test]
fn test_existing_book_is_not_reseeded() {
    let mut stored = AddressBook::new();
    stored.add_record(Record::new("Only"));
    let repo = MockBookRepository::with_book(stored);

    let book = load_or_seed(&repo, page_size(3)).unwrap();

    assert_eq!(book.names().collect::<Vec<_>>(), vec!["Only"]);
    assert_eq!(repo.get_call_count("save"), 0);
}

#[test]
fn test_configured_page_size_applies() {
    let repo = MockBookRepository::new();

    let book = load_or_seed(&repo, page_size(4)).unwrap();

    assert_eq!(book.page_size().get(), 4);
    assert_eq!(book.pages().count(), 2);
}

#[test]
fn test_seed_save_failure_is_reported() {
    let repo = MockBookRepository::failing();

    let result = load_or_seed(&repo, page_size(3));

    assert!(matches!(result, Err(BootstrapError::Storage(_))));
}

#[test]
fn test_file_bootstrap_twice() {
    let store = TestStore::new();
    let repo = FileBookRepository::new(&store.path);

    let first = load_or_seed(&repo, page_size(3)).unwrap();
    assert!(store.path.exists());

    let second = load_or_seed(&repo, page_size(3)).unwrap();
    assert_eq!(second.render_all(), first.render_all());
    assert_eq!(second.find("98765"), "Bob 9876543888\nSteve 9876543888");
}

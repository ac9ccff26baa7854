//! Startup: restore the stored book or create a seeded one.

use crate::book::AddressBook;
use crate::error::{BookResult, BootstrapResult};
use crate::models::Record;
use crate::repositories::BookRepository;
use std::num::NonZeroUsize;
use tracing::info;

/// Contacts written to a brand new book: name, birthday, phones.
const SEED_CONTACTS: &[(&str, (i32, u32, u32), &[&str])] = &[
    ("John", (1972, 5, 12), &["1234567890", "5555555555"]),
    ("Bob", (1988, 12, 11), &["9876543888"]),
    ("Steve", (1999, 6, 18), &["9876543888"]),
    ("Jill", (1992, 3, 13), &["9812345698"]),
    ("Meg", (1998, 7, 11), &["1232345698"]),
    ("Allice", (1996, 9, 20), &["8642345698"]),
];

/// Build the book used on first run.
pub fn seed_book() -> BookResult<AddressBook> {
    let mut book = AddressBook::new();
    for (name, birthday, phones) in SEED_CONTACTS {
        let mut record = Record::with_birthday(*name, *birthday)?;
        for phone in *phones {
            record.add_phone(*phone)?;
        }
        book.add_record(record);
    }
    Ok(book)
}

/// Restore the stored book, or seed and store a new one when nothing
/// usable is stored.
///
/// The returned book shows `page_size` records per page either way.
pub fn load_or_seed<R: BookRepository + ?Sized>(
    repo: &R,
    page_size: NonZeroUsize,
) -> BootstrapResult<AddressBook> {
    let mut book = match repo.load() {
        Some(book) => book,
        None => {
            info!("No stored address book, seeding a new one");
            let book = seed_book()?;
            repo.save(&book)?;
            book
        }
    };
    book.set_page_size(page_size);
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_book() {
        let book = seed_book().unwrap();
        assert_eq!(book.len(), 6);
        assert_eq!(
            book.names().collect::<Vec<_>>(),
            vec!["John", "Bob", "Steve", "Jill", "Meg", "Allice"]
        );
        assert_eq!(
            book.get("John").unwrap().to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: 05-12-1972"
        );
    }

    #[test]
    fn test_seed_book_pages() {
        let book = seed_book().unwrap();
        assert_eq!(book.pages().count(), 2);
    }
}

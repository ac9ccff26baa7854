//! The address book and its paginated traversal.

pub mod address_book;
pub mod pages;

pub use address_book::{AddressBook, DEFAULT_PAGE_SIZE};
pub use pages::Pages;

//! Data models for the address book.
//!
//! A [`Record`] is one contact: a name, its phone numbers and an optional
//! birthday, built from the validated value objects in [`crate::domain`].

pub mod record;

pub use record::Record;

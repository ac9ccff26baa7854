//! Address Book - an in-memory contact book with validated fields, paginated
//! listing, substring search and single-file binary persistence.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record built from those values
//! - **book**: The keyed record collection, search and pagination
//! - **repositories**: Whole-book persistence to a bincode file
//! - **bootstrap**: Restore the stored book or seed a new one
//! - **prompt**: Line-based search prompt
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod prompt;
pub mod repositories;

pub use book::{AddressBook, Pages};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, BootstrapError, ConfigError, StorageError};
pub use models::Record;
pub use repositories::{BookRepository, FileBookRepository};

//! Domain value objects.
//!
//! Type-safe wrappers for the fields of a contact: its name, its phone
//! numbers and its birthday. Phone and birthday validate at construction
//! time, so an invalid value can never be represented in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;

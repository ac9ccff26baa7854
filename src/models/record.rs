//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One contact: a name, zero or more phone numbers and an optional birthday.
///
/// The name is fixed at construction; renaming a contact means adding a new
/// record and deleting the old one from the book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a new record with a birthday given as (year, month, day).
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidBirthday` if the birthday is rejected.
    pub fn with_birthday(name: impl Into<String>, birthday: (i32, u32, u32)) -> BookResult<Self> {
        let mut record = Self::new(name);
        record.add_birthday(birthday)?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// The record is left untouched when the phone is invalid.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        debug!(name = %self.name, phone, "Removed phone");
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, appended at the end.
    ///
    /// The old phone is removed before the new one is validated: when `new`
    /// is invalid this returns `InvalidPhone` and `old` stays removed.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        let index = self.position_of(old)?;
        self.phones.remove(index);
        self.add_phone(new)
    }

    /// Look up a phone number.
    ///
    /// Only the first phone is compared: if it differs from `phone` the
    /// lookup fails even when a later phone would match.
    pub fn find_phone(&self, phone: &str) -> BookResult<&Phone> {
        match self.phones.first() {
            Some(first) if *first == *phone => Ok(first),
            _ => Err(BookError::NotFound(format!("phone {} for {}", phone, self.name))),
        }
    }

    /// Set or replace the birthday, given as (year, month, day).
    ///
    /// A rejected birthday leaves the previous one in place.
    pub fn add_birthday(&mut self, (year, month, day): (i32, u32, u32)) -> BookResult<()> {
        let birthday = Birthday::new(year, month, day)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days until the next birthday, or `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Same as [`Record::days_to_birthday`], counted from `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|birthday| birthday.days_until(today))
    }

    /// Full rendering, as shown in listings.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Name followed by the phone numbers, space separated.
    ///
    /// This is the surface searched by [`AddressBook::find`](crate::book::AddressBook::find).
    pub fn render_compact(&self) -> String {
        format!("{} {}", self.name, self.joined_phones(" "))
    }

    fn joined_phones(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| *p == *phone)
            .ok_or_else(|| BookError::NotFound(format!("phone {} for {}", phone, self.name)))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.joined_phones("; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

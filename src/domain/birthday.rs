//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How far back a birthday may lie, in years.
pub const MAX_AGE_YEARS: u32 = 100;

/// A contact's date of birth.
///
/// The date must fall within the last [`MAX_AGE_YEARS`] years, today
/// included. Construction fails otherwise, so a `Birthday` never holds an
/// out-of-range date.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new(1972, 5, 12).unwrap();
/// assert_eq!(birthday.to_string(), "05-12-1972");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a (year, month, day) triple, checked
    /// against the current local date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the triple is not a
    /// calendar date or the date is in the future or more than a hundred
    /// years ago.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        Self::new_at(year, month, day, Local::now().date_naive())
    }

    /// Same as [`Birthday::new`], with an explicit reference date.
    pub fn new_at(
        year: i32,
        month: u32,
        day: u32,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ValidationError::InvalidBirthday(format!(
                "{:04}-{:02}-{:02} is not a calendar date",
                year, month, day
            ))
        })?;

        // Feb 29 a century back clamps to Feb 28.
        let earliest = today
            .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
            .unwrap_or(NaiveDate::MIN);

        if date > today {
            return Err(ValidationError::InvalidBirthday(format!(
                "{} is in the future",
                date
            )));
        }
        if date < earliest {
            return Err(ValidationError::InvalidBirthday(format!(
                "{} is more than {} years ago",
                date, MAX_AGE_YEARS
            )));
        }

        Ok(Self(date))
    }

    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days from `today` until the next occurrence of this birthday's month
    /// and day. Zero when `today` is the birthday.
    ///
    /// A Feb 29 birthday is celebrated on Feb 28 in common years.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        let mut next = self.anniversary_in(today.year());
        if next < today {
            next = self.anniversary_in(today.year() + 1);
        }
        (next - today).num_days()
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day() - 1))
            .unwrap_or(self.0)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Persisted dates were range-checked when they were assigned; only the
// calendar date itself is checked on the way back in.
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        NaiveDate::deserialize(deserializer).map(Birthday)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m-%d-%Y"))
    }
}

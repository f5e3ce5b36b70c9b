//! BirthdayDate value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The `chrono` pattern birthdays are written in (`DD.MM.YYYY`).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A birthday parsed from `DD.MM.YYYY`.
///
/// The text the user typed is kept alongside the parsed date, so displaying
/// or persisting a birthday never reformats it.
///
/// # Example
///
/// ```
/// use address_book::domain::BirthdayDate;
/// use chrono::NaiveDate;
///
/// let birthday = BirthdayDate::new("15.06.1990").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
/// assert!(BirthdayDate::new("30.02.2020").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BirthdayDate {
    raw: String,
    date: NaiveDate,
}

impl BirthdayDate {
    /// Parse a birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not follow
    /// the `DD.MM.YYYY` pattern or names a day that does not exist.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();

        if !Self::has_valid_shape(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Digits-only day and month of one or two digits, a four-digit year
    /// from 0001 on. chrono alone accepts signs, padding and short years.
    fn has_valid_shape(raw: &str) -> bool {
        let parts: Vec<&str> = raw.split('.').collect();
        let [day, month, year] = *parts.as_slice() else {
            return false;
        };

        let digits = |s: &str, min: usize, max: usize| {
            (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
        };

        digits(day, 1, 2) && digits(month, 1, 2) && digits(year, 4, 4) && year != "0000"
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the birthday as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Field for BirthdayDate {
    fn value(&self) -> &str {
        &self.raw
    }
}

// Serde support - serialize the original text, not the parsed date
impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

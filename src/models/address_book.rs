//! The address book: every stored contact plus the upcoming-birthday query.

use super::record::Record;
use crate::domain::BIRTHDAY_FORMAT;
use crate::error::{BookError, BookResult};
use crate::scheduling::{adjust_for_weekend, next_anniversary};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default look-ahead for [`AddressBook::upcoming_birthdays`], in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact to congratulate and the (weekend-adjusted) date to do it on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Celebration date as `DD.MM.YYYY`
    pub birthday: String,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.birthday)
    }
}

/// Contacts keyed by name.
///
/// Records keep the order they were first added in; replacing a record with
/// [`add_record`](Self::add_record) keeps its original slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "StoredAddressBook")]
pub struct AddressBook {
    records: Vec<Record>,

    /// Name -> position in `records`
    #[serde(skip)]
    index: HashMap<String, usize>,
}

/// On-disk shape; names are re-keyed on load so the last duplicate wins.
#[derive(Deserialize)]
struct StoredAddressBook {
    #[serde(default)]
    records: Vec<Record>,
}

impl From<StoredAddressBook> for AddressBook {
    fn from(stored: StoredAddressBook) -> Self {
        let mut book = AddressBook::new();
        for record in stored.records {
            book.add_record(record);
        }
        book
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        match self.index.get(record.name().as_str()) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index
                    .insert(record.name().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a contact by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Look up a contact by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    /// Remove a contact.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no contact has this name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let position = self
            .index
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        let record = self.records.remove(position);

        // Records after the removed one shifted down by one
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Birthdays from today's local date through `window_days` days ahead.
    ///
    /// See [`upcoming_birthdays_from`](Self::upcoming_birthdays_from).
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), window_days)
    }

    /// Birthdays whose next occurrence is between `today` and
    /// `today + window_days`, both ends included.
    ///
    /// Each birthday is placed in the current year, or the next one if it has
    /// already passed. Occurrences that land on a weekend are reported on the
    /// following Monday, which may be past the window. Results follow the
    /// book's insertion order.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = next_anniversary(birthday.date(), today)?;

                let delta = (occurrence - today).num_days();
                if !(0..=window).contains(&delta) {
                    return None;
                }

                let celebration = adjust_for_weekend(occurrence);
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday: celebration.format(BIRTHDAY_FORMAT).to_string(),
                })
            })
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

//! Contact service layer.
//!
//! Business rules that sit above the address book: contacts are created on
//! their first phone number, and a contact never holds the same number twice.

use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use tracing::{debug, info};

/// Outcome of [`ContactService::add_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPhoneOutcome {
    /// A new contact was created with the number
    ContactCreated,
    /// The number was added to an existing contact
    PhoneAdded,
}

/// Owns the address book for the lifetime of an interactive session.
#[derive(Debug, Clone)]
pub struct ContactService {
    book: AddressBook,
    birthday_window_days: u32,
}

impl ContactService {
    /// Create a service over an already loaded address book.
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            birthday_window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Use a look-ahead other than [`DEFAULT_WINDOW_DAYS`] for birthdays.
    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window_days = days;
        self
    }

    /// The address book in its current state, for saving.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Give the address book back, ending the session.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Add `phone` to the contact called `name`, creating the contact if needed.
    ///
    /// # Errors
    ///
    /// - `BookError::DuplicatePhone` if the contact already has this number
    /// - `BookError::Validation` if the name or number is malformed
    pub fn add_phone(&mut self, name: &str, phone: &str) -> BookResult<AddPhoneOutcome> {
        if let Some(record) = self.book.find_mut(name) {
            if record.find_phone(phone).is_some() {
                return Err(BookError::DuplicatePhone(phone.to_string()));
            }
            record.add_phone(phone)?;
            debug!("Added phone to contact {}", name);
            return Ok(AddPhoneOutcome::PhoneAdded);
        }

        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        info!("Created contact {}", name);
        Ok(AddPhoneOutcome::ContactCreated)
    }

    /// Replace `old_phone` with `new_phone` on the contact called `name`.
    ///
    /// # Errors
    ///
    /// - `BookError::ContactNotFound` if there is no such contact
    /// - `BookError::DuplicatePhone` if the contact already has `new_phone`
    /// - `BookError::PhoneNotFound` if the contact lacks `old_phone`
    /// - `BookError::Validation` if `new_phone` is malformed
    pub fn change_phone(&mut self, name: &str, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let record = self.record_mut(name)?;
        if record.find_phone(new_phone).is_some() {
            return Err(BookError::DuplicatePhone(new_phone.to_string()));
        }
        record.edit_phone(old_phone, new_phone)?;
        debug!("Changed phone for contact {}", name);
        Ok(())
    }

    /// Remove `phone` from the contact called `name`.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        self.record_mut(name)?.remove_phone(phone)?;
        debug!("Removed phone from contact {}", name);
        Ok(())
    }

    /// Delete the contact called `name`.
    pub fn delete_contact(&mut self, name: &str) -> BookResult<Record> {
        let record = self.book.delete(name)?;
        info!("Deleted contact {}", name);
        Ok(record)
    }

    /// Look up a contact.
    pub fn contact(&self, name: &str) -> BookResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Set the birthday of the contact called `name`.
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> BookResult<()> {
        self.record_mut(name)?.add_birthday(birthday)?;
        debug!("Set birthday for contact {}", name);
        Ok(())
    }

    /// The stored birthday of the contact called `name`, as entered.
    pub fn birthday(&self, name: &str) -> BookResult<Option<&str>> {
        Ok(self.contact(name)?.birthday().map(|b| b.as_str()))
    }

    /// Upcoming birthdays within the configured window, from today.
    pub fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        let upcoming = self.book.upcoming_birthdays(self.birthday_window_days);
        debug!(
            "Found {} birthdays in the next {} days",
            upcoming.len(),
            self.birthday_window_days
        );
        upcoming
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }
}

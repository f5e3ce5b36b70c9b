//! Data models for the address book.
//!
//! This module contains the contact record and the collection that owns
//! every record, along with the upcoming-birthday result type.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use record::Record;

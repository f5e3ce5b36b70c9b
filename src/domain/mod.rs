//! Domain value objects and types.
//!
//! This module contains the validated field types a contact is built from:
//! names, phone numbers and birthdays. Each one is checked at construction
//! time, so an invalid value can never end up inside a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{BirthdayDate, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{PhoneNumber, PHONE_DIGITS};

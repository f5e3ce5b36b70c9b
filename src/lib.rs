//! Address Book - an interactive command-line contact manager.
//!
//! Stores names, phone numbers and birthdays, and reports upcoming birthdays
//! with weekend celebrations moved to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone number, birthday)
//! - **models**: Contact records and the address book that owns them
//! - **scheduling**: Weekday and anniversary calendar helpers
//! - **services**: Command-level rules such as duplicate phone detection
//! - **repositories**: Loading and saving the address book
//! - **assistant**: The interactive command loop
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod scheduling;
pub mod services;

pub use assistant::{Assistant, ConsoleInterface, Interface};
pub use config::Config;
pub use domain::{BirthdayDate, Field, Name, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, RecordError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use services::ContactService;

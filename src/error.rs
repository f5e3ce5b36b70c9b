//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by a single [`Record`](crate::models::Record).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is not stored on the record
    #[error("Phone number '{0}' not found.")]
    PhoneNotFound(String),
}

/// Errors raised by address book and contact operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Malformed user input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with this name exists
    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    /// The phone number is not stored on the contact
    #[error("Phone number '{0}' not found.")]
    PhoneNotFound(String),

    /// The phone number is already stored on the contact
    #[error("Phone number '{0}' already exists.")]
    DuplicatePhone(String),
}

impl From<RecordError> for BookError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Validation(e) => BookError::Validation(e),
            RecordError::PhoneNotFound(phone) => BookError::PhoneNotFound(phone),
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The temporary file could not replace the target file
    #[error("Failed to replace address book file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced while running a single interactive command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for the command
    #[error("Invalid arguments. Usage:\n{usage}")]
    InvalidArguments { usage: String },

    /// The input does not start with a registered command name
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Help was requested for a name no command has
    #[error("No such command.")]
    NoSuchCommand(String),

    /// The command reached the address book and it refused
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

//! Application service layer.
//!
//! Services contain the command-level rules and sit between the interactive
//! assistant and the address book.

mod contact_service;

pub use contact_service::{AddPhoneOutcome, ContactService};

//! Interactive command-line assistant.
//!
//! Reads one command per line, runs it against the address book and prints
//! the reply. The console is reached only through the [`Interface`] trait so
//! the loop can be driven by scripted input in tests.

pub mod command;
mod interface;
mod session;

pub use command::{Command, CommandKind, COMMANDS};
pub use interface::{ConsoleInterface, Interface};
pub use session::{Assistant, Reply};

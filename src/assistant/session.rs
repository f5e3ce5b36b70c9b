//! The read-eval loop that drives the address book from typed commands.

use super::command::{find_command, help_for, help_text, parse_input, Command, CommandKind};
use super::interface::Interface;
use crate::error::{CommandError, CommandResult};
use crate::repositories::AddressBookRepository;
use crate::services::{AddPhoneOutcome, ContactService};
use tracing::{debug, error, info};

const PROMPT: &str = "Enter a command: ";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show a message and keep going
    Message(String),
    /// Show a command list and keep going
    Help(String),
    /// Show a message and stop
    Exit(String),
}

/// Interactive assistant over a [`ContactService`].
///
/// Command errors are shown to the user and never end the session; only
/// `exit`/`close` or the end of input do.
///
/// With a repository attached, the book is saved after every command that
/// changes it, so an interrupted session keeps its edits.
pub struct Assistant<I: Interface> {
    service: ContactService,
    interface: I,
    repository: Option<Box<dyn AddressBookRepository>>,
}

impl<I: Interface> Assistant<I> {
    pub fn new(service: ContactService, interface: I) -> Self {
        Self {
            service,
            interface,
            repository: None,
        }
    }

    /// Save the book through `repository` after each changing command.
    pub fn with_autosave(mut self, repository: Box<dyn AddressBookRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn service(&self) -> &ContactService {
        &self.service
    }

    /// End the session and return the service so its book can be saved.
    pub fn into_service(self) -> ContactService {
        self.service
    }

    pub fn into_parts(self) -> (ContactService, I) {
        (self.service, self.interface)
    }

    /// Run until the user exits or input runs out.
    pub fn run(&mut self) {
        self.interface
            .show_help(&help_text("Welcome to the assistant bot!"));

        loop {
            let Some(line) = self.interface.get_input(PROMPT) else {
                info!("Input closed, leaving");
                self.interface.show_message("Goodbye!");
                break;
            };

            let reply = match self.execute(&line) {
                Ok(reply) => reply,
                Err(CommandError::UnknownCommand(_)) => {
                    Reply::Help(help_text("Invalid command."))
                }
                Err(e) => {
                    debug!("Command failed: {}", e);
                    Reply::Message(e.to_string())
                }
            };

            match reply {
                Reply::Message(message) => self.interface.show_message(&message),
                Reply::Help(help) => self.interface.show_help(&help),
                Reply::Exit(message) => {
                    self.interface.show_message(&message);
                    break;
                }
            }
        }
    }

    /// Parse and run one line of input.
    ///
    /// # Errors
    ///
    /// - `CommandError::UnknownCommand` for a blank line or unregistered name
    /// - `CommandError::InvalidArguments` for the wrong number of arguments
    /// - `CommandError::Book` when the address book rejects the operation
    pub fn execute(&mut self, line: &str) -> CommandResult<Reply> {
        let (name, args) =
            parse_input(line).ok_or_else(|| CommandError::UnknownCommand(String::new()))?;
        let command =
            find_command(&name).ok_or_else(|| CommandError::UnknownCommand(name.clone()))?;
        command.check_args(&args)?;

        debug!("Running command {}", name);
        let reply = self.dispatch(command, &args)?;

        if command.kind.is_mutating() {
            self.autosave();
        }
        Ok(reply)
    }

    /// A failed save leaves the change in memory for the next attempt.
    fn autosave(&mut self) {
        let Some(repository) = &self.repository else {
            return;
        };

        if let Err(e) = repository.save(self.service.book()) {
            error!("Failed to save address book: {}", e);
            self.interface
                .show_message(&format!("An unexpected error occurred: {}", e));
        }
    }

    fn dispatch(&mut self, command: &Command, args: &[&str]) -> CommandResult<Reply> {
        let reply = match (command.kind, args) {
            (CommandKind::Hello, _) => Reply::Message("Hello, how can I help you?".to_string()),
            (CommandKind::Exit, _) => Reply::Exit("Goodbye!".to_string()),
            (CommandKind::Add, [name, phone]) => match self.service.add_phone(name, phone)? {
                AddPhoneOutcome::ContactCreated => {
                    Reply::Message(format!("Contact '{}' with number '{}' added.", name, phone))
                }
                AddPhoneOutcome::PhoneAdded => {
                    Reply::Message(format!("Added number '{}' to contact '{}'.", phone, name))
                }
            },
            (CommandKind::Change, [name, old, new]) => {
                self.service.change_phone(name, old, new)?;
                Reply::Message(format!(
                    "Number changed from '{}' to '{}' for contact '{}'.",
                    old, new, name
                ))
            }
            (CommandKind::Phone, [name]) => Reply::Message(self.service.contact(name)?.to_string()),
            (CommandKind::RemovePhone, [name, phone]) => {
                self.service.remove_phone(name, phone)?;
                Reply::Message(format!("Removed number '{}' from contact '{}'.", phone, name))
            }
            (CommandKind::Delete, [name]) => {
                self.service.delete_contact(name)?;
                Reply::Message(format!("Contact '{}' deleted.", name))
            }
            (CommandKind::All, _) => {
                let book = self.service.book();
                if book.is_empty() {
                    Reply::Message("No contacts stored.".to_string())
                } else {
                    Reply::Message(book.to_string())
                }
            }
            (CommandKind::AddBirthday, [name, birthday]) => {
                self.service.add_birthday(name, birthday)?;
                Reply::Message(format!("{}'s birthday is {}.", name, birthday))
            }
            (CommandKind::ShowBirthday, [name]) => match self.service.birthday(name)? {
                Some(birthday) => Reply::Message(format!("{}'s birthday is {}.", name, birthday)),
                None => Reply::Message(format!("{} has no birthday set.", name)),
            },
            (CommandKind::Birthdays, _) => {
                let upcoming = self.service.upcoming_birthdays();
                if upcoming.is_empty() {
                    Reply::Message("No upcoming birthdays.".to_string())
                } else {
                    let lines: Vec<String> =
                        upcoming.iter().map(|b| format!("  {}", b)).collect();
                    Reply::Message(format!("Upcoming birthdays:\n{}", lines.join("\n")))
                }
            }
            (CommandKind::Help, []) => Reply::Help(help_text("Available commands:")),
            (CommandKind::Help, [name]) => Reply::Message(help_for(&name.to_lowercase())?),
            _ => {
                return Err(CommandError::InvalidArguments {
                    usage: command.help_line(),
                })
            }
        };

        Ok(reply)
    }
}

//! The command table: names, usage strings and argument checks.

use crate::error::{CommandError, CommandResult};

/// Every action the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Exit,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
}

impl CommandKind {
    /// Whether a successful run changes the address book.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Change | Self::RemovePhone | Self::Delete | Self::AddBirthday
        )
    }
}

/// How many arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Extra arguments are ignored
    Any,
    /// Exactly this many
    Exact(usize),
    /// Between zero and this many
    AtMost(usize),
}

/// One registered command.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub kind: CommandKind,
    pub names: &'static [&'static str],
    pub usage: &'static str,
    pub arity: Arity,
}

impl Command {
    /// `names` joined by commas, followed by `: usage` when there is one.
    pub fn help_line(&self) -> String {
        let names = self.names.join(", ");
        if self.usage.is_empty() {
            names
        } else {
            format!("{}: {}", names, self.usage)
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.names.contains(&name)
    }

    /// Reject a call with the wrong number of arguments.
    pub fn check_args(&self, args: &[&str]) -> CommandResult<()> {
        let ok = match self.arity {
            Arity::Any => true,
            Arity::Exact(n) => args.len() == n,
            Arity::AtMost(n) => args.len() <= n,
        };

        if ok {
            Ok(())
        } else {
            Err(CommandError::InvalidArguments {
                usage: self.help_line(),
            })
        }
    }
}

/// Commands in the order they are listed in help output.
pub const COMMANDS: &[Command] = &[
    Command {
        kind: CommandKind::Hello,
        names: &["hello"],
        usage: "",
        arity: Arity::Any,
    },
    Command {
        kind: CommandKind::Exit,
        names: &["exit", "close"],
        usage: "",
        arity: Arity::Any,
    },
    Command {
        kind: CommandKind::Add,
        names: &["add"],
        usage: "[name] [number]",
        arity: Arity::Exact(2),
    },
    Command {
        kind: CommandKind::Change,
        names: &["change"],
        usage: "[name] [old number] [new number]",
        arity: Arity::Exact(3),
    },
    Command {
        kind: CommandKind::Phone,
        names: &["phone"],
        usage: "[name]",
        arity: Arity::Exact(1),
    },
    Command {
        kind: CommandKind::RemovePhone,
        names: &["remove-phone"],
        usage: "[name] [number]",
        arity: Arity::Exact(2),
    },
    Command {
        kind: CommandKind::Delete,
        names: &["delete"],
        usage: "[name]",
        arity: Arity::Exact(1),
    },
    Command {
        kind: CommandKind::All,
        names: &["all"],
        usage: "",
        arity: Arity::Any,
    },
    Command {
        kind: CommandKind::AddBirthday,
        names: &["add-birthday"],
        usage: "[name] [birthday]",
        arity: Arity::Exact(2),
    },
    Command {
        kind: CommandKind::ShowBirthday,
        names: &["show-birthday"],
        usage: "[name]",
        arity: Arity::Exact(1),
    },
    Command {
        kind: CommandKind::Birthdays,
        names: &["birthdays"],
        usage: "",
        arity: Arity::Any,
    },
    Command {
        kind: CommandKind::Help,
        names: &["help"],
        usage: "[command]",
        arity: Arity::AtMost(1),
    },
];

/// Look up a command by any of its names.
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.matches(name))
}

/// Help line for a single command.
pub fn help_for(name: &str) -> CommandResult<String> {
    find_command(name)
        .map(Command::help_line)
        .ok_or_else(|| CommandError::NoSuchCommand(name.to_string()))
}

/// Full command list under `title`.
pub fn help_text(title: &str) -> String {
    let lines: Vec<String> = COMMANDS.iter().map(Command::help_line).collect();
    format!("{}\n{}", title, lines.join("\n"))
}

/// Split a line into a lower-cased command name and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(input: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = input.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

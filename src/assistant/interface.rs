//! Console I/O boundary of the assistant.

use std::io::{self, BufRead, Write};
use tracing::warn;

/// Where the assistant reads commands from and writes replies to.
pub trait Interface {
    /// Prompt for one line of input. `None` means the input is exhausted.
    fn get_input(&mut self, prompt: &str) -> Option<String>;

    /// Show a reply to a command.
    fn show_message(&mut self, message: &str);

    /// Show a list of commands.
    fn show_help(&mut self, help: &str);
}

/// Interactive terminal: reads stdin, writes stdout.
#[derive(Debug, Default)]
pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn new() -> Self {
        Self
    }
}

impl Interface for ConsoleInterface {
    fn get_input(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        if let Err(e) = io::stdout().flush() {
            warn!("Failed to flush prompt: {}", e);
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn show_message(&mut self, message: &str) {
        println!("{}", message);
    }

    fn show_help(&mut self, help: &str) {
        println!("{}", help);
    }
}

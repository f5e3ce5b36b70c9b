use address_book::assistant::Interface;
use std::collections::VecDeque;

/// Interface that replays fixed input lines and records everything shown.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedInterface {
    inputs: VecDeque<String>,
    pub messages: Vec<String>,
    pub help: Vec<String>,
    pub prompts: usize,
}

#[allow(dead_code)]
impl ScriptedInterface {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            inputs: lines.iter().map(|l| format!("{}\n", l)).collect(),
            ..Default::default()
        }
    }

    /// Lines that were never read because the session ended first.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Interface for ScriptedInterface {
    fn get_input(&mut self, _prompt: &str) -> Option<String> {
        self.prompts += 1;
        self.inputs.pop_front()
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn show_help(&mut self, help: &str) {
        self.help.push(help.to_string());
    }
}

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Console;

/// One line of console output, tagged with how it was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Prompt(String),
    Say(String),
    Warn(String),
    Error(String),
    Success(String),
    Document(String),
}

/// Console that answers prompts from a fixed script and records output.
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: RefCell<VecDeque<String>>,
    pub output: RefCell<Vec<Output>>,
}

#[allow(dead_code)]
impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: RefCell::new(inputs.into_iter().map(Into::into).collect()),
            output: RefCell::new(Vec::new()),
        }
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.borrow().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.collect(|line| match line {
            Output::Prompt(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.collect(|line| match line {
            Output::Warn(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.collect(|line| match line {
            Output::Error(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn documents(&self) -> Vec<String> {
        self.collect(|line| match line {
            Output::Document(text) => Some(text.clone()),
            _ => None,
        })
    }

    fn collect(&self, pick: impl Fn(&Output) -> Option<String>) -> Vec<String> {
        self.output.borrow().iter().filter_map(pick).collect()
    }

    fn record(&self, line: Output) {
        self.output.borrow_mut().push(line);
    }
}

impl Console for ScriptedConsole {
    fn read_line(&self, prompt: &str) -> Result<String, AppError> {
        self.record(Output::Prompt(prompt.to_string()));
        self.inputs.borrow_mut().pop_front().ok_or(AppError::InputClosed)
    }

    fn say(&self, message: &str) {
        self.record(Output::Say(message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.record(Output::Warn(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.record(Output::Error(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.record(Output::Success(message.to_string()));
    }

    fn show_document(&self, document: &str) {
        self.record(Output::Document(document.to_string()));
    }
}

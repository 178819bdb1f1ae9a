use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use colored::{Color, Colorize};
use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Console;

/// Console bound to the process stdin/stdout.
///
/// On a terminal, questions go through `dialoguer` for line editing. When
/// stdin is piped, lines are read verbatim so sessions can be scripted.
#[derive(Debug, Clone)]
pub struct TerminalConsole {
    color: bool,
    interactive: bool,
}

impl TerminalConsole {
    pub fn new(color: bool) -> Self {
        Self { color, interactive: io::stdin().is_terminal() && io::stdout().is_terminal() }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color { text.color(color).to_string() } else { text.to_string() }
    }

    fn read_piped_line(&self, prompt: &str) -> Result<String, AppError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{} ", self.paint(&format!("{prompt}:"), Color::Cyan))?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            println!();
            return Err(AppError::InputClosed);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        println!();
        Ok(trimmed.to_string())
    }
}

impl Console for TerminalConsole {
    fn read_line(&self, prompt: &str) -> Result<String, AppError> {
        if !self.interactive {
            return self.read_piped_line(prompt);
        }

        let styled = self.paint(prompt, Color::Cyan);
        match Input::<String>::new().with_prompt(styled).allow_empty(true).interact_text() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err))
                if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
            {
                Err(AppError::InputClosed)
            }
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }

    fn say(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        println!("{}", self.paint(message, Color::Yellow));
    }

    fn error(&self, message: &str) {
        println!("{}", self.paint(message, Color::Red));
    }

    fn success(&self, message: &str) {
        println!("{}", self.paint(&format!("✅ {message}"), Color::Green));
    }

    fn show_document(&self, document: &str) {
        let rule = "-".repeat(79);
        println!("{rule}");
        print!("{document}");
        println!("{rule}");
    }
}

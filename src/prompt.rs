//! Console abstraction for the interactive questionnaires.
//!
//! This module provides a trait-based abstraction over terminal I/O,
//! allowing unit tests to script the whole operator dialogue without a
//! terminal attached.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

#[cfg(test)]
use mockall::automock;

/// Trait for the operator dialogue, allowing dependency injection for testing.
///
/// The real implementation reads stdin and writes stdout. Prompts and
/// rejection messages both go to stdout so a session transcript reads the
/// way it looked on the terminal.
#[cfg_attr(test, automock)]
pub trait Console {
    /// Print `text` as a prompt, without a trailing newline, and read one
    /// line of input.
    ///
    /// The returned line has its terminator stripped but is otherwise
    /// untouched. Returns an error when input is closed before a line
    /// arrives, since an unanswered questionnaire cannot continue.
    fn prompt(&mut self, text: &str) -> Result<String>;

    /// Print a rejection message on its own line.
    fn report(&mut self, text: &str);
}

/// Real console over stdin/stdout.
#[derive(Debug, Clone, Default)]
pub struct StdioConsole;

impl StdioConsole {
    /// Create a new StdioConsole
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdioConsole {
    fn prompt(&mut self, text: &str) -> Result<String> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(text.as_bytes())
            .context("Failed to write prompt")?;
        stdout.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read operator input")?;
        if read == 0 {
            anyhow::bail!("Input closed before the questionnaire was answered");
        }

        Ok(strip_terminator(line))
    }

    fn report(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Remove a trailing `\n` or `\r\n` without touching any other whitespace.
fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

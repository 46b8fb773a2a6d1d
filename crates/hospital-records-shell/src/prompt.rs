//! Line-based prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::{ShellError, ShellResult};

/// Message printed when an integer prompt gets anything else.
pub const INVALID_INTEGER: &str = "Please enter a valid integer.";

/// Reads one line per prompt and writes prompts and messages.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line.
    pub fn say(&mut self, text: impl Display) -> ShellResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> ShellResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Print `label` without a newline and read the reply, trimmed.
    pub fn ask(&mut self, label: &str) -> ShellResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the reply parses as an integer.
    pub fn ask_int<T: FromStr>(&mut self, label: &str) -> ShellResult<T> {
        loop {
            let reply = self.ask(label)?;
            match reply.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(INVALID_INTEGER)?,
            }
        }
    }

    /// Ask for a replacement value; a blank reply means keep the current one.
    pub fn ask_optional(&mut self, label: &str) -> ShellResult<Option<String>> {
        let reply = self.ask(label)?;
        Ok((!reply.is_empty()).then_some(reply))
    }
}

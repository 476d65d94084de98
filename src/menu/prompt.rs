//! Prompting
//!
//! Line-based reads with a prompt written first.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Outcome of asking for a value
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    /// The line parsed
    Value(T),

    /// The line did not parse and was discarded
    Invalid,

    /// Input is exhausted
    Eof,
}

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prompt and read one line without its terminator
    ///
    /// Returns `None` at end of input.
    pub fn ask_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD instead of ending the session
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Prompt and parse one line, ignoring surrounding whitespace
    pub fn ask<T: FromStr>(&mut self, prompt: &str) -> io::Result<Input<T>> {
        Ok(match self.ask_line(prompt)? {
            None => Input::Eof,
            Some(line) => match line.trim().parse() {
                Ok(value) => Input::Value(value),
                Err(_) => Input::Invalid,
            },
        })
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

//! Line-oriented terminal I/O
//!
//! Wraps any `BufRead`/`Write` pair so the menu can be driven from stdin in
//! production and from an in-memory buffer in tests.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Prompting console over an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to terminal")
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// Returns `None` once the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write to terminal")?;
        self.output.flush().context("Failed to flush terminal")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like `read_line`, but running out of input is an error
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        match self.read_line(prompt)? {
            Some(line) => Ok(line),
            None => bail!("Input closed while waiting for an answer"),
        }
    }

    /// Ask a question and lowercase the answer
    pub fn ask_lowercase(&mut self, prompt: &str) -> Result<String> {
        Ok(self.ask(prompt)?.to_lowercase())
    }

    /// Consume the console, returning the output stream
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Why a numeric answer was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    NotANumber,
    Negative,
}

/// Parse a book id (any integer)
pub fn parse_id(text: &str) -> Result<i64, NumberError> {
    text.trim().parse().map_err(|_| NumberError::NotANumber)
}

/// Parse a stock quantity (non-negative integer)
pub fn parse_quantity(text: &str) -> Result<i64, NumberError> {
    let quantity: i64 = text.trim().parse().map_err(|_| NumberError::NotANumber)?;
    if quantity < 0 {
        return Err(NumberError::Negative);
    }
    Ok(quantity)
}

//! Prompt/response console
//!
//! Wraps any `BufRead` + `Write` pair so the session can be driven by a real
//! terminal or by scripted input in tests.

use crate::types::AtmError;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::warn;

/// Line-oriented console over an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a full line
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), AtmError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Read one line without its line terminator
    ///
    /// # Errors
    ///
    /// Returns `AtmError::InputClosed` at end of input.
    pub fn read_line(&mut self) -> Result<String, AtmError> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AtmError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Write `prompt` without a newline and read the answer
    pub fn prompt(&mut self, prompt: &str) -> Result<String, AtmError> {
        write!(self.output, "{}", prompt)?;
        self.read_line()
    }

    /// Prompt for a non-negative decimal amount
    ///
    /// # Errors
    ///
    /// Returns `AtmError::InvalidAmount` if the answer is not a number or is negative.
    pub fn prompt_amount(&mut self, prompt: &str) -> Result<Decimal, AtmError> {
        let answer = self.prompt(prompt)?;
        parse_amount(&answer).inspect_err(|_| warn!("Malformed amount entered: '{}'", answer))
    }
}

/// Parse a user-entered amount
///
/// Surrounding whitespace is ignored. Negative values are rejected.
pub fn parse_amount(input: &str) -> Result<Decimal, AtmError> {
    let trimmed = input.trim();
    match Decimal::from_str(trimmed) {
        Ok(amount) if !amount.is_sign_negative() || amount.is_zero() => Ok(amount),
        _ => Err(AtmError::invalid_amount(trimmed)),
    }
}

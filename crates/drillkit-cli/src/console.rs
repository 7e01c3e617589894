//! Thin layer over [`IntInput`] that turns fatal input outcomes into
//! [`anyhow`] errors so exercises only see a value or a stop.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use drillkit::{IntInput, NextInt};

pub struct Console<R, W, E> {
    input: IntInput<R, W, E>,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: IntInput<R, W, E>) -> Self {
        Self { input }
    }

    /// Prompts until an integer is entered. `Ok(None)` means the user
    /// stopped, either with the sentinel or by closing the input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<i32>> {
        match self.input.next_int(prompt) {
            NextInt::Value(value) => Ok(Some(value)),
            NextInt::UserStopped => Ok(None),
            NextInt::AllocationFailed(err) => Err(err).context("line buffer could not grow"),
            NextInt::InputFailed(err) => Err(err).context("failed to read from the terminal"),
        }
    }

    /// Like [`Console::ask`], with a hint naming the sentinel appended:
    /// `"{text} (enter 'q' to {action}): "`.
    pub fn ask_or(&mut self, text: &str, action: &str) -> Result<Option<i32>> {
        let prompt = format!(
            "{text} (enter '{}' to {action}): ",
            self.input.options().sentinel
        );
        self.ask(&prompt)
    }

    /// Parse errors reported while prompting.
    pub fn reported_errors(&self) -> usize {
        self.input.reported_errors()
    }

    pub fn out(&mut self) -> &mut W {
        self.input.out()
    }

    pub fn err(&mut self) -> &mut E {
        self.input.diagnostics()
    }

    pub fn into_parts(self) -> (R, W, E) {
        self.input.into_parts()
    }
}

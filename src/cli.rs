//! Line-oriented interactive front ends for the demonstration binaries.
//!
//! Each submodule exposes `run`, which reads its inputs through a [`Prompter`]
//! and writes the full report to the prompter's output. Binaries wire the
//! prompter to stdin/stdout; tests wire it to in-memory buffers.

pub mod fibonacci;
pub mod fractional_knapsack;
pub mod huffman;
pub mod knapsack_01;
pub mod n_queens;
pub mod quicksort;

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use log::debug;

use crate::cs::error::{Error, Result};

/// Writes prompts to `output` and reads one answer per line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The report destination.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows `prompt` and returns the next line without its line terminator.
    ///
    /// # Errors
    /// * `Error::EmptyInput` - if input ends before a line is read
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::empty_input(format!(
                "input ended while waiting for {:?}",
                prompt.trim()
            )));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        debug!("{:?} -> {:?}", prompt.trim(), line);
        Ok(line)
    }

    /// Shows `prompt` and parses the answer, ignoring surrounding whitespace.
    ///
    /// # Errors
    /// * `Error::NonNumeric` - if the answer does not parse as `T`
    pub fn read_number<T: FromStr>(&mut self, prompt: &str, field: &str) -> Result<T> {
        let line = self.read_line(prompt)?;
        line.trim()
            .parse()
            .map_err(|_| Error::non_numeric(field, line.trim()))
    }

    /// Reads a count or index, rejecting negative numbers as an invalid dimension.
    pub fn read_count(&mut self, prompt: &str, field: &str) -> Result<usize> {
        let value: i64 = self.read_number(prompt, field)?;
        usize::try_from(value).map_err(|_| {
            Error::invalid_dimension(format!("{} must not be negative, got {}", field, value))
        })
    }
}

/// Writes a heading followed by the fixed complexity notes of a program.
pub fn write_complexity<W: Write>(out: &mut W, heading: &str, notes: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", heading)?;
    writeln!(out, "{}", notes)?;
    Ok(())
}

/// Joins values with single spaces.
pub fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Entry point shared by the binaries: installs the logger, runs `program`
/// against stdin/stdout, and exits with status 1 after printing any error.
pub fn main_with(program: fn(&mut Prompter<StdinLock<'static>, Stdout>) -> Result<()>) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    if let Err(e) = program(&mut prompter) {
        let _ = prompter.output().flush();
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

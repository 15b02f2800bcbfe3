use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use barbershop_common::ShopError;
use colored::*;
use thiserror::Error;

use crate::terminal::{colors, screen};

#[derive(Debug, Error)]
pub enum PromptError {
    /// Standard input reached its end, nobody is left to answer.
    #[error("input closed")]
    Closed,
}

/// Reads answers line by line and writes the questions in front of them.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Trimmed answer, possibly empty.
    pub fn text(&mut self, label: &str) -> anyhow::Result<String> {
        write!(
            self.output,
            "{} {}: ",
            "?".color(colors::ACCENT).bold(),
            label.color(colors::TEXT_DEFAULT)
        )?;
        self.output.flush()?;

        // read_line consumes the offending bytes, the next read starts clean
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(PromptError::Closed.into()),
            Ok(_) => Ok(line.trim().to_string()),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                Err(ShopError::InvalidText(label.to_string()).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Like [`text`](Self::text) but a blank answer is refused.
    pub fn required_text(&mut self, label: &str) -> anyhow::Result<String> {
        let answer = self.text(label)?;
        if answer.is_empty() {
            return Err(ShopError::EmptyField(label.to_string()).into());
        }
        Ok(answer)
    }

    /// `None` for a blank answer.
    pub fn optional_text(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        let answer = self.text(label)?;
        Ok((!answer.is_empty()).then_some(answer))
    }

    pub fn number<T: FromStr>(&mut self, label: &str) -> anyhow::Result<T> {
        let answer = self.text(label)?;
        parse_number(&answer).map_err(Into::into)
    }

    /// `None` for a blank answer, otherwise it must parse.
    pub fn optional_number<T: FromStr>(&mut self, label: &str) -> anyhow::Result<Option<T>> {
        match self.optional_text(label)? {
            Some(answer) => Ok(Some(parse_number(&answer)?)),
            None => Ok(None),
        }
    }

    pub fn pause(&mut self) -> anyhow::Result<()> {
        self.text("Press Enter to continue")?;
        Ok(())
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        screen::clear(&mut self.output)?;
        Ok(())
    }
}

fn parse_number<T: FromStr>(answer: &str) -> Result<T, ShopError> {
    answer
        .parse::<T>()
        .map_err(|_| ShopError::InvalidNumericInput(answer.to_string()))
}

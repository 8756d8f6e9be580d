//! Line-based prompts
//!
//! Reads one line per question from any `BufRead`, so the wizard can be
//! driven from stdin in production and from a byte buffer in tests.

use anyhow::{Context, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// A single question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub label: String,
    /// Returned for an empty answer or end of input
    pub default: Option<String>,
}

impl PromptSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Text shown before the cursor, e.g. "Select bundle (1-3) (3): "
    pub fn render(&self) -> String {
        match &self.default {
            Some(d) if !d.is_empty() => format!("{} ({}): ", self.label, d),
            _ => format!("{}: ", self.label),
        }
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question and return the trimmed answer, or the default if empty
    pub fn ask(&mut self, spec: &PromptSpec) -> Result<String> {
        write!(self.output, "{}", spec.render())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read answer")?;

        let answer = line.trim();
        if answer.is_empty() {
            Ok(spec.default.clone().unwrap_or_default())
        } else {
            Ok(answer.to_string())
        }
    }

    /// Yes/no question; `y` or `yes` (any case) is yes, anything else is no
    pub fn confirm(&mut self, label: &str, default_yes: bool) -> Result<bool> {
        let default = if default_yes { "y" } else { "n" };
        let answer = self.ask(&PromptSpec::new(label).with_default(default))?;
        Ok(is_yes(&answer))
    }

    /// Ask each question in order and return the answers in the same order
    pub fn ask_all(&mut self, specs: &[PromptSpec]) -> Result<Vec<String>> {
        specs.iter().map(|spec| self.ask(spec)).collect()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

//! Terminal output and operator prompting.
//!
//! Provides a centralized interface for all CLI output, including colored
//! status lines, plus the `Prompter` every interactive dialog goes through.
//! Prompts read from any `BufRead`, so tests can script operator answers.

use colored::*;
use std::io::{self, BufRead, Write};

/// Fixed marker printed before every operator input.
pub const PROMPT: &str = "(CLN)> ";

/// Manages all CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }
}

/// Reads operator answers from a line-oriented input source.
///
/// Every question in the run goes through one `Prompter`, so the dialog
/// order matches the input stream exactly. End of input is an error rather
/// than an empty answer: the decision gates must never spin on a closed
/// stream.
pub struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Prints `message`, then the prompt marker, and reads one trimmed line.
    pub fn ask(&mut self, message: &str) -> io::Result<String> {
        print!("{}\n{}", message, PROMPT);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while awaiting an answer",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Asks a yes/no question; only `y` and `yes` count as confirmation.
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.ask(message)?;
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }
}

//! Helper functions that are common to CLI apps

use crate::cli::constants::*;
use crate::transaction::Transaction;
use std::io::{self, BufRead, Write};

/// **Contains full variants of all existing commands.**
///
/// Wrapped by `help_contents()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_full() -> String {
    format!("{HELP} {DEPOSIT} {WITHDRAW} {STATEMENT} {HISTORY} {HISTORY_BY_DATE} {BALANCE} {QUIT}")
}

/// **Contains short variants of all existing commands.**
///
/// Wrapped by `help_contents()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_short() -> String {
    "h d w s hi hd b q".to_string()
}

/// **All existing commands in their full and short variants, one variant per line.**
pub fn help_contents() -> String {
    format!("{}\n{}", help_contents_full(), help_contents_short())
}

/// **A line of user input**
#[derive(Debug, PartialEq)]
pub enum Input {
    /// A non-blank line, including its line terminator
    Line(String),

    /// A blank line, to be ignored (in the main loop)
    Blank,

    /// The input has been closed, or can no longer be read
    Eof,
}

/// **Writes `label` as a prompt and reads one line from `reader`.**
///
/// A read error is reported to `stderr` and treated as the end of input,
/// so that a broken input can't keep the main loop spinning.
///
/// # Errors
/// - Writing or flushing the prompt fails.
pub fn read_line_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> io::Result<Input> {
    write!(writer, "\n{label}")?;
    writer.flush()?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(Input::Eof),
        Ok(_) if line.trim().is_empty() => Ok(Input::Blank),
        Ok(_) => Ok(Input::Line(line)),
        Err(err) => {
            eprintln!("[ERROR] Failed to read line: {}", err);
            Ok(Input::Eof)
        }
    }
}

/// Formats transactions one per line, as they appear in a statement.
pub fn format_transactions(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions.".to_string();
    }

    transactions
        .iter()
        .map(|tx| tx.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

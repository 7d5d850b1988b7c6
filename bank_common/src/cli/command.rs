//! Parsing of a CLI input line into a command

use crate::cli::constants::*;
use crate::errors::LedgerError;
use crate::validation::parse_date;
use chrono::NaiveDate;
use thiserror::Error;

/// **A command entered in a CLI app**
#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Deposit(i64),
    Withdraw(i64),
    Statement,
    History,
    HistoryByDate(NaiveDate),
    Balance,
    Quit,
}

/// **Reasons a CLI input line can't be turned into a [`Command`]**
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unrecognized command; try `help`.")]
    Unrecognized,

    #[error("The {0} command: {0} {1}")]
    Usage(&'static str, &'static str),

    #[error("Only integer numbers are allowed as the amount; you provided '{0}'.")]
    InvalidAmount(String),

    #[error(transparent)]
    InvalidDate(#[from] LedgerError),
}

/// **Parses a line of user input into a [`Command`]**
///
/// The command word is case-insensitive, and can be given
/// in its full or its short variant.
///
/// # Errors
/// - Unknown command word, `CommandError::Unrecognized`;
/// - Missing argument, `CommandError::Usage`;
/// - Amount is not an integer, `CommandError::InvalidAmount`;
/// - Date is not a `YYYY-MM-DD` calendar date, `CommandError::InvalidDate`.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    let Some(first) = words.first() else {
        return Err(CommandError::Unrecognized);
    };
    let cmd = first.to_lowercase();

    match cmd.as_str() {
        HELP | "h" => Ok(Command::Help),
        DEPOSIT | "d" => parse_amount(&words, DEPOSIT).map(Command::Deposit),
        WITHDRAW | "w" => parse_amount(&words, WITHDRAW).map(Command::Withdraw),
        STATEMENT | "s" => Ok(Command::Statement),
        HISTORY | "hi" => Ok(Command::History),
        HISTORY_BY_DATE | "hd" => match words.get(1) {
            Some(date) => Ok(Command::HistoryByDate(parse_date(date)?)),
            None => Err(CommandError::Usage(HISTORY_BY_DATE, "<YYYY-MM-DD>")),
        },
        BALANCE | "b" => Ok(Command::Balance),
        QUIT | "q" => Ok(Command::Quit),
        _ => Err(CommandError::Unrecognized),
    }
}

fn parse_amount(words: &[&str], cmd: &'static str) -> Result<i64, CommandError> {
    let word = words.get(1).ok_or(CommandError::Usage(cmd, "<amount>"))?;
    word.parse::<i64>()
        .map_err(|_| CommandError::InvalidAmount(word.to_string()))
}

use thiserror::Error;

/// **An application-specific error type**
///
/// Deposits and withdrawals never fail, so the only thing that can go wrong
/// is the input of a query, such as a malformed date.
#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("Invalid date \"{0}\"; expected the YYYY-MM-DD format")]
    InvalidDate(String),
}

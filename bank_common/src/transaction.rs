use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The date format used in statements
pub const STATEMENT_DATE_FORMAT: &str = "%d-%m-%Y";

/// The first line of every statement
pub const STATEMENT_HEADER: &str = "Date Amount Balance";

pub const INSUFFICIENT_FUNDS: &str = "Failed: Insufficient Funds";
pub const NEGATIVE_TRANSACTION: &str = "Failed: Negative Transaction";

/// **A transaction type**
///
/// An immutable record of one balance-affecting event.
///
/// `amount` is always the magnitude of the applied change, so a deposit and
/// a withdrawal of the same size record the same amount. The direction can
/// only be recovered by comparing the balances of consecutive transactions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Transaction {
    balance: i64,
    amount: i64,
    #[serde(rename = "date")]
    timestamp: NaiveDateTime,
}

impl Transaction {
    /// **Creates a new transaction stamped with the current local time.**
    pub fn new(balance: i64, amount: i64) -> Self {
        Self::with_timestamp(balance, amount, Local::now().naive_local())
    }

    /// **Creates a new transaction with the given timestamp.**
    pub fn with_timestamp(balance: i64, amount: i64, timestamp: NaiveDateTime) -> Self {
        Transaction {
            balance,
            amount,
            timestamp,
        }
    }

    /// The balance after this transaction
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// The magnitude of the change applied by this transaction
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The calendar date of the transaction, without the time of day
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// **The status annotation shown in a statement**
    ///
    /// Negative balances take precedence over non-positive amounts.
    /// A successful transaction has an empty status.
    pub fn status(&self) -> &'static str {
        if self.balance < 0 {
            INSUFFICIENT_FUNDS
        } else if self.amount <= 0 {
            NEGATIVE_TRANSACTION
        } else {
            ""
        }
    }
}

/// Renders the statement line of a transaction: the status (if any),
/// the date, the amount and the balance, separated by spaces.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status();
        if !status.is_empty() {
            write!(f, "{status} ")?;
        }
        write!(
            f,
            "{} {} {}",
            self.timestamp.format(STATEMENT_DATE_FORMAT),
            self.amount,
            self.balance
        )
    }
}

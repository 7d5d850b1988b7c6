use crate::transaction::{Transaction, STATEMENT_HEADER};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// **The account's ledger**
///
/// Tracks the current balance, as the most recent transaction,
/// and the ordered log of all transactions ever applied.
///
/// Deposits and withdrawals always succeed. Overdrafts and non-positive
/// amounts are not rejected; they only get annotated in the statement.
#[derive(Debug)]
pub struct Ledger {
    current: Transaction,
    history: Vec<Transaction>,
}

impl Ledger {
    /// **Creates a new ledger with a zero balance and an empty history.**
    pub fn new() -> Self {
        Ledger {
            current: Transaction::new(0, 0),
            history: vec![],
        }
    }

    /// **Applies a signed change to the balance, stamped with the current local time.**
    ///
    /// Returns the new balance.
    pub fn apply(&mut self, delta: i64) -> i64 {
        self.apply_at(delta, Local::now().naive_local())
    }

    /// **Applies a signed change to the balance with an explicit timestamp.**
    ///
    /// The recorded amount is the magnitude of `delta`.
    /// Saturates at the bounds of `i64` rather than overflowing.
    ///
    /// Returns the new balance.
    pub fn apply_at(&mut self, delta: i64, timestamp: NaiveDateTime) -> i64 {
        let balance = self.current.balance().saturating_add(delta);
        let amount = delta.saturating_abs();

        self.current = Transaction::with_timestamp(balance, amount, timestamp);
        self.history.push(self.current.clone());

        balance
    }

    /// **Deposit funds**
    ///
    /// Returns the balance after the deposit.
    pub fn deposit(&mut self, amount: i64) -> i64 {
        self.apply(amount)
    }

    /// **Withdraw funds**
    ///
    /// The amount is expected to be positive, but that isn't enforced.
    /// Withdrawing more than the balance is allowed and leaves it negative.
    ///
    /// Returns the balance after the withdrawal.
    pub fn withdraw(&mut self, amount: i64) -> i64 {
        self.apply(amount.saturating_neg())
    }

    pub fn balance(&self) -> i64 {
        self.current.balance()
    }

    /// The most recent transaction
    pub fn current(&self) -> &Transaction {
        &self.current
    }

    /// **Renders the statement of the most recent transaction**
    ///
    /// The first line is always the column header;
    /// the second one is the transaction's line.
    pub fn statement(&self) -> String {
        format!("{STATEMENT_HEADER}\n{}", self.current)
    }

    /// **Returns a copy of the entire transaction log, in order.**
    pub fn history(&self) -> Vec<Transaction> {
        self.history.clone()
    }

    /// **Returns the transactions made on the given calendar date, in order.**
    pub fn history_by_date(&self, date: NaiveDate) -> Vec<Transaction> {
        self.history
            .iter()
            .filter(|tx| tx.date() == date)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

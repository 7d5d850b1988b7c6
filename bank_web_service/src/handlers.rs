//! Handler functions

use crate::errors::WebServiceLedgerError;
use bank_common::validation;
use bank_common::{AmountRequest, HistoryByDateRequest, Ledger};
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::Mutex;
use warp::{Rejection, Reply};

/// The ledger, shared between all handlers
///
/// Every handler holds the lock for the whole of its operation,
/// so concurrent deposits and withdrawals are serialized.
pub type SharedLedger = Arc<Mutex<Ledger>>;

/// The `deposit` handler
///
/// Always succeeds; responds with the new balance.
///
/// POST /account/deposit?amount=100
pub async fn deposit(
    request: AmountRequest,
    ledger: SharedLedger,
) -> Result<impl Reply, Infallible> {
    log::debug!("deposit; request = {:?}", request);
    let balance = ledger.lock().await.deposit(request.amount);
    Ok(format!("Deposit successful. Current balance: {}", balance))
}

/// The `withdraw` handler
///
/// Always succeeds, even if it leaves the balance negative;
/// responds with the new balance.
///
/// POST /account/withdraw?amount=50
pub async fn withdraw(
    request: AmountRequest,
    ledger: SharedLedger,
) -> Result<impl Reply, Infallible> {
    log::debug!("withdraw; request = {:?}", request);
    let balance = ledger.lock().await.withdraw(request.amount);
    Ok(format!("Withdrawal successful. Current balance: {}", balance))
}

/// The `statement` handler
///
/// Responds with the statement of the most recent transaction, as plain text.
///
/// GET /account/statement
pub async fn statement(ledger: SharedLedger) -> Result<impl Reply, Infallible> {
    log::debug!("statement");
    Ok(ledger.lock().await.statement())
}

/// The `history` handler
///
/// Responds with the entire transaction log, in order.
///
/// GET /account/history
pub async fn history(ledger: SharedLedger) -> Result<impl Reply, Infallible> {
    log::debug!("history");
    let history = ledger.lock().await.history();
    Ok(warp::reply::json(&history))
}

/// The `history_by_date` handler
///
/// Responds with the transactions made on the given day, in order.
/// A malformed date is rejected with [`WebServiceLedgerError`].
///
/// GET /account/historyByDate?date=2023-10-05
pub async fn history_by_date(
    request: HistoryByDateRequest,
    ledger: SharedLedger,
) -> Result<impl Reply, Rejection> {
    log::debug!("history_by_date; request = {:?}", request);

    let date = validation::parse_date(&request.date)
        .map_err(|err| warp::reject::custom(WebServiceLedgerError(err)))?;

    let history = ledger.lock().await.history_by_date(date);
    Ok(warp::reply::json(&history))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_are_not_lost() {
        let ledger: SharedLedger = Arc::new(Mutex::new(Ledger::new()));

        let mut handles = vec![];
        for i in 0..100 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                let request = AmountRequest { amount: 10 };
                if i % 2 == 0 {
                    deposit(request, ledger).await.map(|_| ())
                } else {
                    withdraw(request, ledger).await.map(|_| ())
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let ledger = ledger.lock().await;
        assert_eq!(0, ledger.balance());
        assert_eq!(100, ledger.len());

        // Consecutive balances always differ by exactly the recorded amount.
        let history = ledger.history();
        let mut previous = 0;
        for tx in history {
            assert_eq!(10, (tx.balance() - previous).abs());
            assert_eq!(10, tx.amount());
            previous = tx.balance();
        }
    }
}

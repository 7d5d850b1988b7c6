//! The service's routes
//!
//! All routes live under `/account`.

use crate::errors::handle_rejection;
use crate::handlers::{self, SharedLedger};
use bank_common::{AmountRequest, HistoryByDateRequest};
use std::convert::Infallible;
use warp::{Filter, Reply};

/// **All routes of the service, with rejection handling and request logging**
pub fn routes(
    ledger: SharedLedger,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let log = warp::log("bank");

    account(ledger).recover(handle_rejection).with(log)
}

/// The `/account/*` routes
pub fn account(
    ledger: SharedLedger,
) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    let ledger_state = warp::any().map(move || ledger.clone());

    let deposit = warp::path!("account" / "deposit")
        .and(warp::post())
        .and(warp::query::<AmountRequest>())
        .and(ledger_state.clone())
        .and_then(handlers::deposit);

    let withdraw = warp::path!("account" / "withdraw")
        .and(warp::post())
        .and(warp::query::<AmountRequest>())
        .and(ledger_state.clone())
        .and_then(handlers::withdraw);

    let statement = warp::path!("account" / "statement")
        .and(warp::get())
        .and(ledger_state.clone())
        .and_then(handlers::statement);

    let history = warp::path!("account" / "history")
        .and(warp::get())
        .and(ledger_state.clone())
        .and_then(handlers::history);

    let history_by_date = warp::path!("account" / "historyByDate")
        .and(warp::get())
        .and(warp::query::<HistoryByDateRequest>())
        .and(ledger_state)
        .and_then(handlers::history_by_date);

    deposit
        .or(withdraw)
        .or(statement)
        .or(history)
        .or(history_by_date)
}

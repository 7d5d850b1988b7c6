use bank_common::errors::LedgerError;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reject::{InvalidQuery, MethodNotAllowed, Reject};
use warp::{Rejection, Reply};

#[derive(Debug)]
pub struct WebServiceLedgerError(pub LedgerError);

impl Reject for WebServiceLedgerError {}

/// **Turns a rejection into a plain-text response with a fitting status code**
///
/// - No route matched the path: 404;
/// - A ledger error or a malformed query: 400;
/// - The path matched, but the method didn't: 405;
/// - Anything else: 500.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(ledger_err) = err.find::<WebServiceLedgerError>() {
        (StatusCode::BAD_REQUEST, ledger_err.0.to_string())
    } else if let Some(query_err) = err.find::<InvalidQuery>() {
        (StatusCode::BAD_REQUEST, query_err.to_string())
    } else if err.find::<MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed".to_string(),
        )
    } else {
        log::error!("unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    };

    if code.is_client_error() {
        log::warn!("{}: {}", code, message);
    }

    Ok(warp::reply::with_status(message, code))
}

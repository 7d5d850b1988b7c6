use serde::{Deserialize, Serialize};

/// Query parameters of `POST /account/deposit` and `POST /account/withdraw`
#[derive(Debug, Deserialize, Serialize)]
pub struct AmountRequest {
    pub amount: i64,
}

/// Query parameters of `GET /account/historyByDate`
///
/// The date is kept as a string so that a malformed date reaches the handler
/// and gets reported as a ledger error, instead of a generic query rejection.
#[derive(Debug, Deserialize, Serialize)]
pub struct HistoryByDateRequest {
    pub date: String,
}

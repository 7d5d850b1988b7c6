pub mod cli;
pub mod errors;
pub mod ledger;
pub mod requests;
pub mod transaction;
pub mod validation;

pub use ledger::Ledger;
pub use requests::*;
pub use transaction::Transaction;

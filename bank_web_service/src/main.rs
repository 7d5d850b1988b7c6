//! The "Bank Web Service's" entry point.

use bank_common::Ledger;
use bank_web_service::config::{get_addr, ADDR_ENV_VAR, DEFAULT_LOG_FILTER};
use bank_web_service::routes;
use std::env;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The "Bank Web Service's" entry point.
#[tokio::main]
async fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", DEFAULT_LOG_FILTER);
    }
    pretty_env_logger::init();

    let addr = get_addr(env::args().nth(1), env::var(ADDR_ENV_VAR).ok());

    let ledger = Arc::new(Mutex::new(Ledger::new()));

    log::info!("Serving the account on http://{}", addr);

    // Start up the server
    warp::serve(routes(ledger)).run(addr).await;
}

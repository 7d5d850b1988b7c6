//! The "Bank CLI" app's entry point.

use bank_cli::logic::main_loop;
use std::error::Error;

/// The "Bank CLI" app's entry point.
fn main() -> Result<(), Box<dyn Error>> {
    main_loop()?;

    Ok(())
}

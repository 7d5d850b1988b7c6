//! Constants and helpers that are common to the CLI apps
//!
//! Both the local CLI and the web client CLI parse the same commands,
//! so the parsing and the help text live here, and are tested here.

pub mod command;
pub mod constants;
pub mod helpers;

pub use command::{parse_command, Command, CommandError};

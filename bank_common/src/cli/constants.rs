/// CLI Commands

pub const HELP: &str = "help";
pub const DEPOSIT: &str = "deposit";
pub const WITHDRAW: &str = "withdraw";
pub const STATEMENT: &str = "statement";
pub const HISTORY: &str = "history";
pub const HISTORY_BY_DATE: &str = "historybydate";
pub const BALANCE: &str = "balance";
pub const QUIT: &str = "quit";

/// Various CLI constants

pub const PROMPT: &str = "> ";

pub mod logic;

/// The web service's address, used when none is given on the command line
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";

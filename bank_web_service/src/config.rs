//! Service configuration

use std::net::SocketAddr;

/// The address the service binds to when none is configured
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// The environment variable holding the bind address
pub const ADDR_ENV_VAR: &str = "BANK_ADDR";

/// The default `RUST_LOG` filter
pub const DEFAULT_LOG_FILTER: &str = "bank=info";

/// **Get the bind address**
///
/// The command-line argument takes precedence over the environment variable.
///
/// - If neither is provided, returns [`DEFAULT_ADDR`].
/// - If the chosen value can't be parsed into a socket address,
///   logs a warning and returns [`DEFAULT_ADDR`].
pub fn get_addr(arg: Option<String>, env: Option<String>) -> SocketAddr {
    let default = default_addr();

    let Some(addr) = arg.or(env) else {
        log::info!("No bind address provided; using default: {}", default);
        return default;
    };

    addr.trim().parse().unwrap_or_else(|_| {
        log::warn!(
            "Provided bind address \"{}\" could not be parsed; using default: {}",
            addr,
            default
        );
        default
    })
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr_matches_constant() {
        assert_eq!(DEFAULT_ADDR, default_addr().to_string());
    }

    #[test]
    fn test_default_addr_none() {
        assert_eq!(DEFAULT_ADDR, get_addr(None, None).to_string());
    }

    #[test]
    fn test_default_addr_bad() {
        assert_eq!(
            DEFAULT_ADDR,
            get_addr(Some("localhost:http".to_string()), None).to_string()
        );
    }

    #[test]
    fn test_env_addr() {
        assert_eq!(
            "0.0.0.0:3000",
            get_addr(None, Some("0.0.0.0:3000".to_string())).to_string()
        );
    }

    #[test]
    fn test_arg_takes_precedence() {
        assert_eq!(
            "127.0.0.1:3333",
            get_addr(
                Some("127.0.0.1:3333".to_string()),
                Some("0.0.0.0:3000".to_string())
            )
            .to_string()
        );
    }
}

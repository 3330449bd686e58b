//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), with defaults suitable for local
//! development.

use std::net::SocketAddr;

use anyhow::Context;

use crate::chain::units;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Host used when rendering content gateway URLs.
    pub ipfs_gateway_host: String,

    /// Number of funded dev accounts seeded at startup.
    pub dev_accounts: usize,

    /// Initial balance of each dev account, in wei.
    pub dev_account_balance: u128,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as a
    /// [`SocketAddr`], or `DEV_ACCOUNT_BALANCE_ETH` is not a valid decimal
    /// ether amount.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("invalid LISTEN_ADDR")?;

        let ipfs_gateway_host = std::env::var("IPFS_GATEWAY_HOST")
            .unwrap_or_else(|_| "gateway.pinata.cloud".to_string());

        let dev_accounts = parse_env("DEV_ACCOUNTS", 4);

        let dev_account_balance = units::parse_ether(
            &std::env::var("DEV_ACCOUNT_BALANCE_ETH").unwrap_or_else(|_| "100".to_string()),
        )
        .context("invalid DEV_ACCOUNT_BALANCE_ETH")?;

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30);

        Ok(Self {
            listen_addr,
            ipfs_gateway_host,
            dev_accounts,
            dev_account_balance,
            request_timeout_secs,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_falls_back_on_missing() {
        assert_eq!(parse_env("TICKETPLACE_TEST_UNSET_KEY", 7u64), 7);
    }
}

//! Wallet DTOs: account listing and balances.

use serde::Serialize;
use utoipa::ToSchema;

use crate::chain::{Address, units};

/// Single funded account entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WalletDto {
    /// Account address.
    #[schema(value_type = String)]
    pub address: Address,
    /// Balance in wei, as a decimal string.
    pub balance_wei: String,
    /// Balance in ether, as a decimal string.
    pub balance_eth: String,
}

impl WalletDto {
    /// Builds a wallet entry from an address and its wei balance.
    #[must_use]
    pub fn new(address: Address, balance: u128) -> Self {
        Self {
            address,
            balance_wei: balance.to_string(),
            balance_eth: units::format_ether(balance),
        }
    }
}

/// Response body for `GET /wallets`.
#[derive(Debug, Serialize, ToSchema)]
pub struct WalletListResponse {
    /// Accounts in creation order.
    pub data: Vec<WalletDto>,
    /// Total number of accounts.
    pub total: u64,
}

/// Response body for `GET /wallets/{address}/balance`.
#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceResponse {
    /// Queried account address.
    #[schema(value_type = String)]
    pub address: Address,
    /// Balance in wei, as a decimal string.
    pub balance_wei: String,
    /// Balance in ether, as a decimal string.
    pub balance_eth: String,
}

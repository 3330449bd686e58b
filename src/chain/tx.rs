//! Transaction handles, receipts, and the chain error taxonomy.
//!
//! Write calls on contract bindings return a [`PendingTx`] parameterized
//! over the call's typed output. Callers must `wait()` for confirmation
//! before reporting success; there is no optimistic-success path.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Address;

/// Errors surfaced by the chain layer.
///
/// Coarse reason codes in the manner of a wallet provider: connection
/// failures, payment failures, and contract reverts are distinguished so
/// the gateway can map each onto a specific user-facing response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// The address is not a known account on the node.
    #[error("unknown account: {0}")]
    UnknownAccount(Address),

    /// A write call was issued through a binding with no connected signer.
    #[error("no signer connected to contract binding")]
    NoSigner,

    /// No contract is deployed at the given address.
    #[error("unknown contract: {0}")]
    UnknownContract(Address),

    /// Event index is out of range on the marketplace.
    #[error("unknown event: {0}")]
    UnknownEvent(u64),

    /// Token id does not exist on the ticket contract.
    #[error("unknown token: {0}")]
    UnknownToken(u64),

    /// No listing exists for the given ticket id.
    #[error("no listing for ticket: {0}")]
    UnknownListing(u64),

    /// An unsold listing already exists for the ticket id.
    #[error("ticket already listed: {0}")]
    AlreadyListed(u64),

    /// Caller balance cannot cover the transaction value.
    #[error("insufficient funds: need {required} wei, have {available} wei")]
    InsufficientFunds {
        /// Wei required by the transaction.
        required: u128,
        /// Wei available in the caller account.
        available: u128,
    },

    /// The contract rejected the call.
    #[error("execution reverted: {0}")]
    Reverted(String),

    /// A decimal amount string could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Unique transaction hash assigned by the node at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TxHash(uuid::Uuid);

impl TxHash {
    /// Creates a fresh random transaction hash.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for TxHash {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.0.simple())
    }
}

/// Receipt for a confirmed transaction.
#[derive(Debug, Clone, Serialize)]
pub struct TxReceipt {
    /// Transaction hash.
    pub tx_hash: TxHash,
    /// Block in which the transaction was included.
    pub block_number: u64,
    /// Confirmation timestamp.
    pub confirmed_at: DateTime<Utc>,
}

/// Handle for a submitted transaction.
///
/// The node confirms every accepted transaction within one block, so the
/// outcome is already sealed when the handle is created; `wait()` is still
/// the only way to observe it, which keeps every write path honest about
/// awaiting confirmation.
#[derive(Debug)]
pub struct PendingTx<T> {
    outcome: Result<(T, TxReceipt), ChainError>,
}

impl<T> PendingTx<T> {
    /// Creates a handle around a sealed outcome.
    pub(crate) fn sealed(outcome: Result<(T, TxReceipt), ChainError>) -> Self {
        Self { outcome }
    }

    /// Suspends until the transaction is confirmed or failed, returning the
    /// call's typed output and the receipt.
    ///
    /// # Errors
    ///
    /// Returns the [`ChainError`] the transaction failed with.
    pub async fn wait(self) -> Result<(T, TxReceipt), ChainError> {
        // One scheduling round stands in for the one-block confirmation
        // delay of a real network.
        tokio::task::yield_now().await;
        self.outcome
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn tx_hashes_are_unique() {
        assert_ne!(TxHash::new(), TxHash::new());
    }

    #[test]
    fn tx_hash_display_is_hex() {
        let s = TxHash::new().to_string();
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 34);
    }

    #[tokio::test]
    async fn wait_surfaces_sealed_success() {
        let receipt = TxReceipt {
            tx_hash: TxHash::new(),
            block_number: 1,
            confirmed_at: Utc::now(),
        };
        let tx = PendingTx::sealed(Ok((7u64, receipt)));
        let Ok((value, receipt)) = tx.wait().await else {
            panic!("expected success");
        };
        assert_eq!(value, 7);
        assert_eq!(receipt.block_number, 1);
    }

    #[tokio::test]
    async fn wait_surfaces_sealed_failure() {
        let tx: PendingTx<()> = PendingTx::sealed(Err(ChainError::Reverted("nope".to_string())));
        let Err(err) = tx.wait().await else {
            panic!("expected failure");
        };
        assert_eq!(err, ChainError::Reverted("nope".to_string()));
    }
}

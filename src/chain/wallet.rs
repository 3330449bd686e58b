//! Connected-signer capability over the chain node.

use std::sync::Arc;

use super::node::ChainNode;
use super::tx::ChainError;
use super::Address;

/// A connected wallet: the capability object returned by
/// [`ChainNode::connect`].
///
/// Exposes the account address and balance and authorizes write calls when
/// attached to a contract binding via `connect`. Shared read-only across
/// views; the node serializes any conflicting writes.
#[derive(Debug, Clone)]
pub struct Wallet {
    node: Arc<ChainNode>,
    address: Address,
}

impl Wallet {
    pub(crate) fn new(node: Arc<ChainNode>, address: Address) -> Self {
        Self { node, address }
    }

    /// The connected account address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Current wei balance of the connected account.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownAccount`] if the account has vanished
    /// from the node.
    pub async fn balance(&self) -> Result<u128, ChainError> {
        self.node.account_balance(self.address).await
    }
}

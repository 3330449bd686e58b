//! Typed binding for a ticket NFT contract instance.

use std::sync::Arc;

use super::node::ChainNode;
use super::tx::{ChainError, PendingTx};
use super::wallet::Wallet;
use super::Address;

/// Handle over one event's ticket contract.
///
/// Every event deployed through the marketplace owns exactly one instance;
/// bind it with the `ticket_nft_address` from the event record.
#[derive(Debug, Clone)]
pub struct TicketNft {
    node: Arc<ChainNode>,
    address: Address,
    caller: Option<Address>,
}

impl TicketNft {
    /// Binds the contract at `address` for read calls.
    #[must_use]
    pub fn attach(node: Arc<ChainNode>, address: Address) -> Self {
        Self {
            node,
            address,
            caller: None,
        }
    }

    /// Returns a binding that signs write calls as `wallet`.
    #[must_use]
    pub fn connect(&self, wallet: &Wallet) -> Self {
        Self {
            node: Arc::clone(&self.node),
            address: self.address,
            caller: Some(wallet.address()),
        }
    }

    /// The bound contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    fn caller(&self) -> Result<Address, ChainError> {
        self.caller.ok_or(ChainError::NoSigner)
    }

    /// Total number of minted tickets (also the next token id).
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownContract`] for a bad address.
    pub async fn total_minted_tickets(&self) -> Result<u64, ChainError> {
        self.node.total_minted(self.address).await
    }

    /// Owner of `token_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownToken`] for nonexistent tokens.
    pub async fn owner_of(&self, token_id: u64) -> Result<Address, ChainError> {
        self.node.owner_of(self.address, token_id).await
    }

    /// Metadata locator of `token_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownToken`] for nonexistent tokens.
    pub async fn token_uri(&self, token_id: u64) -> Result<String, ChainError> {
        self.node.token_uri(self.address, token_id).await
    }

    /// Number of tokens owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownContract`] for a bad address.
    pub async fn balance_of(&self, owner: Address) -> Result<u64, ChainError> {
        self.node.balance_of(self.address, owner).await
    }

    /// Submits a `mint_ticket` transaction; the confirmed output is the
    /// new token id.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NoSigner`] when no wallet is connected.
    pub async fn mint_ticket(
        &self,
        recipient: Address,
        metadata_uri: &str,
    ) -> Result<PendingTx<u64>, ChainError> {
        let caller = self.caller()?;
        Ok(self
            .node
            .mint_ticket(self.address, caller, recipient, metadata_uri.to_string())
            .await)
    }

    /// Submits a mint whose metadata locator is composed by the contract
    /// as `<cid>/<token_id>.json`, with the token id assigned inside the
    /// same transaction. The confirmed output is the new token id and the
    /// stored locator.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NoSigner`] when no wallet is connected.
    pub async fn mint_ticket_from_cid(
        &self,
        recipient: Address,
        cid: &str,
    ) -> Result<PendingTx<(u64, String)>, ChainError> {
        let caller = self.caller()?;
        Ok(self
            .node
            .mint_ticket_from_cid(self.address, caller, recipient, cid.to_string())
            .await)
    }

    /// Submits an `approve` transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NoSigner`] when no wallet is connected.
    pub async fn approve(
        &self,
        spender: Address,
        token_id: u64,
    ) -> Result<PendingTx<()>, ChainError> {
        let caller = self.caller()?;
        Ok(self
            .node
            .approve(self.address, caller, spender, token_id)
            .await)
    }

    /// Submits a `transfer_from` transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NoSigner`] when no wallet is connected.
    pub async fn transfer_from(
        &self,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<PendingTx<()>, ChainError> {
        let caller = self.caller()?;
        Ok(self
            .node
            .transfer_from(self.address, caller, from, to, token_id)
            .await)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn attach_to_unknown_contract_errors_on_read() {
        let node = Arc::new(ChainNode::new());
        let nft = TicketNft::attach(node, Address::from_low_u64(123));
        assert!(matches!(
            nft.total_minted_tickets().await,
            Err(ChainError::UnknownContract(_))
        ));
    }
}

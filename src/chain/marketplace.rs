//! Typed binding for the marketplace contract.
//!
//! `attach` gives a read-only binding; `connect` attaches a wallet so
//! write calls carry a caller identity, mirroring the
//! `contract.connect(signer)` convention of browser tooling.

use std::sync::Arc;

use super::node::ChainNode;
use super::tx::{ChainError, PendingTx};
use super::wallet::Wallet;
use super::Address;
use crate::domain::{EventRecord, Listing};

/// Handle over the deployed marketplace contract.
#[derive(Debug, Clone)]
pub struct Marketplace {
    node: Arc<ChainNode>,
    address: Address,
    caller: Option<Address>,
}

impl Marketplace {
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

    /// Number of registered events.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownContract`] when bound to the wrong
    /// address.
    pub async fn event_counter(&self) -> Result<u64, ChainError> {
        self.node.event_counter(self.address).await
    }

    /// Event record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownEvent`] for out-of-range indices.
    pub async fn events(&self, index: u64) -> Result<EventRecord, ChainError> {
        self.node.event(self.address, index).await
    }

    /// Listing record for `ticket_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownListing`] when the ticket has never
    /// been listed.
    pub async fn listings(&self, ticket_id: u64) -> Result<Listing, ChainError> {
        self.node.listing(self.address, ticket_id).await
    }

    /// `true` iff `ticket_id` exists on the ticket contract at
    /// `nft_address`. Never reverts.
    pub async fn validate_ticket(&self, ticket_id: u64, nft_address: Address) -> bool {
        self.node.validate_ticket(nft_address, ticket_id).await
    }

    /// Submits a `create_event` transaction.
    ///
    /// The confirmed output is `(event_id, ticket_nft_address)`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NoSigner`] when no wallet is connected.
    pub async fn create_event(
        &self,
        name: &str,
        description: &str,
        ticket_price: u128,
        max_tickets: u64,
        image_uri: &str,
        event_details: &str,
    ) -> Result<PendingTx<(u64, Address)>, ChainError> {
        let caller = self.caller()?;
        Ok(self
            .node
            .create_event(
                self.address,
                caller,
                name.to_string(),
                description.to_string(),
                ticket_price,
                max_tickets,
                image_uri.to_string(),
                event_details.to_string(),
            )
            .await)
    }

    /// Submits a `list_ticket` transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NoSigner`] when no wallet is connected.
    pub async fn list_ticket(
        &self,
        ticket_id: u64,
        price: u128,
        nft_address: Address,
    ) -> Result<PendingTx<()>, ChainError> {
        let caller = self.caller()?;
        Ok(self
            .node
            .list_ticket(self.address, caller, ticket_id, price, nft_address)
            .await)
    }

    /// Submits a payable `buy_ticket` transaction with the given wei value.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NoSigner`] when no wallet is connected.
    pub async fn buy_ticket(
        &self,
        ticket_id: u64,
        value: u128,
    ) -> Result<PendingTx<()>, ChainError> {
        let caller = self.caller()?;
        Ok(self
            .node
            .buy_ticket(self.address, caller, ticket_id, value)
            .await)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_without_signer_is_rejected() {
        let node = Arc::new(ChainNode::new());
        let marketplace = Marketplace::attach(Arc::clone(&node), node.marketplace_address());
        let result = marketplace
            .create_event("x", "y", 1, 1, "", "")
            .await;
        assert!(matches!(result, Err(ChainError::NoSigner)));
    }

    #[tokio::test]
    async fn wrong_address_is_unknown_contract() {
        let node = Arc::new(ChainNode::new());
        let bogus = Marketplace::attach(Arc::clone(&node), Address::from_low_u64(77));
        assert!(matches!(
            bogus.event_counter().await,
            Err(ChainError::UnknownContract(_))
        ));
    }
}

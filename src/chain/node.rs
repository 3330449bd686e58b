//! In-process chain node holding marketplace and ticket contract state.
//!
//! [`ChainNode`] is the authoritative backend every binding reads from and
//! writes to. State lives behind a single [`tokio::sync::RwLock`]: reads
//! are concurrent, writes are serialized per transaction, and each applied
//! transaction advances the block number by one.
//!
//! The node deploys the marketplace contract at construction time and a
//! fresh ticket contract for every registered event, mirroring what the
//! on-chain factory does.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use super::tx::{ChainError, PendingTx, TxHash, TxReceipt};
use super::wallet::Wallet;
use super::Address;
use crate::domain::{EventRecord, Listing};

/// Per-token state inside a ticket contract.
#[derive(Debug)]
struct TokenState {
    owner: Address,
    uri: String,
}

/// State of one deployed ticket contract instance.
#[derive(Debug)]
struct TicketContractState {
    max_tickets: u64,
    tokens: Vec<TokenState>,
    balances: HashMap<Address, u64>,
    approvals: HashMap<u64, Address>,
}

/// Mutable node state behind the lock.
#[derive(Debug)]
struct NodeState {
    accounts: HashMap<Address, u128>,
    account_order: Vec<Address>,
    events: Vec<EventRecord>,
    listings: HashMap<u64, Listing>,
    ticket_contracts: HashMap<Address, TicketContractState>,
    next_address: u64,
    block_number: u64,
}

impl NodeState {
    fn fresh_address(&mut self) -> Address {
        let address = Address::from_low_u64(self.next_address);
        self.next_address += 1;
        address
    }

    fn require_account(&self, address: Address) -> Result<(), ChainError> {
        if self.accounts.contains_key(&address) {
            Ok(())
        } else {
            Err(ChainError::UnknownAccount(address))
        }
    }

    fn ticket_contract_mut(
        &mut self,
        address: Address,
    ) -> Result<&mut TicketContractState, ChainError> {
        self.ticket_contracts
            .get_mut(&address)
            .ok_or(ChainError::UnknownContract(address))
    }
}

/// The in-process chain node.
///
/// Cheap to share via `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct ChainNode {
    marketplace_address: Address,
    state: RwLock<NodeState>,
}

impl ChainNode {
    /// Creates a node with the marketplace contract deployed and no
    /// accounts.
    #[must_use]
    pub fn new() -> Self {
        let marketplace_address = Address::from_low_u64(1);
        Self {
            marketplace_address,
            state: RwLock::new(NodeState {
                accounts: HashMap::new(),
                account_order: Vec::new(),
                events: Vec::new(),
                listings: HashMap::new(),
                ticket_contracts: HashMap::new(),
                next_address: 2,
                block_number: 0,
            }),
        }
    }

    /// Address of the deployed marketplace contract.
    #[must_use]
    pub const fn marketplace_address(&self) -> Address {
        self.marketplace_address
    }

    /// Current block number.
    pub async fn block_number(&self) -> u64 {
        self.state.read().await.block_number
    }

    /// Creates a funded account and returns its address.
    pub async fn create_account(&self, initial_balance: u128) -> Address {
        let mut state = self.state.write().await;
        let address = state.fresh_address();
        state.accounts.insert(address, initial_balance);
        state.account_order.push(address);
        address
    }

    /// Connects a wallet for a known account.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownAccount`] when no account exists at
    /// `address` (the "no wallet injected" case). Connection failures are
    /// surfaced immediately; there is no retry.
    pub async fn connect(self: &Arc<Self>, address: Address) -> Result<Wallet, ChainError> {
        let state = self.state.read().await;
        state.require_account(address)?;
        Ok(Wallet::new(Arc::clone(self), address))
    }

    /// Returns the wei balance of a known account.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownAccount`] for unknown addresses.
    pub async fn account_balance(&self, address: Address) -> Result<u128, ChainError> {
        let state = self.state.read().await;
        state
            .accounts
            .get(&address)
            .copied()
            .ok_or(ChainError::UnknownAccount(address))
    }

    /// All accounts with balances, in creation order.
    pub async fn accounts(&self) -> Vec<(Address, u128)> {
        let state = self.state.read().await;
        state
            .account_order
            .iter()
            .filter_map(|addr| state.accounts.get(addr).map(|bal| (*addr, *bal)))
            .collect()
    }

    fn require_marketplace(&self, address: Address) -> Result<(), ChainError> {
        if address == self.marketplace_address {
            Ok(())
        } else {
            Err(ChainError::UnknownContract(address))
        }
    }

    fn seal<T>(state: &mut NodeState, result: Result<T, ChainError>) -> PendingTx<T> {
        match result {
            Ok(value) => {
                state.block_number += 1;
                PendingTx::sealed(Ok((
                    value,
                    TxReceipt {
                        tx_hash: TxHash::new(),
                        block_number: state.block_number,
                        confirmed_at: Utc::now(),
                    },
                )))
            }
            Err(err) => PendingTx::sealed(Err(err)),
        }
    }

    // ── Marketplace reads ───────────────────────────────────────────────

    /// Number of events registered in the marketplace.
    pub(crate) async fn event_counter(&self, marketplace: Address) -> Result<u64, ChainError> {
        self.require_marketplace(marketplace)?;
        Ok(self.state.read().await.events.len() as u64)
    }

    /// Event record at the given index.
    pub(crate) async fn event(
        &self,
        marketplace: Address,
        index: u64,
    ) -> Result<EventRecord, ChainError> {
        self.require_marketplace(marketplace)?;
        let state = self.state.read().await;
        state
            .events
            .get(index as usize)
            .cloned()
            .ok_or(ChainError::UnknownEvent(index))
    }

    /// Listing record for the given ticket id.
    pub(crate) async fn listing(
        &self,
        marketplace: Address,
        ticket_id: u64,
    ) -> Result<Listing, ChainError> {
        self.require_marketplace(marketplace)?;
        let state = self.state.read().await;
        state
            .listings
            .get(&ticket_id)
            .cloned()
            .ok_or(ChainError::UnknownListing(ticket_id))
    }

    /// Non-reverting authenticity check: `true` iff `token_id` exists on
    /// the ticket contract at `nft_address`.
    pub(crate) async fn validate_ticket(&self, nft_address: Address, token_id: u64) -> bool {
        let state = self.state.read().await;
        state
            .ticket_contracts
            .get(&nft_address)
            .is_some_and(|c| (token_id as usize) < c.tokens.len())
    }

    // ── Ticket contract reads ───────────────────────────────────────────

    /// Total number of tickets minted on a ticket contract.
    pub(crate) async fn total_minted(&self, nft_address: Address) -> Result<u64, ChainError> {
        let state = self.state.read().await;
        state
            .ticket_contracts
            .get(&nft_address)
            .map(|c| c.tokens.len() as u64)
            .ok_or(ChainError::UnknownContract(nft_address))
    }

    /// Owner of a token.
    pub(crate) async fn owner_of(
        &self,
        nft_address: Address,
        token_id: u64,
    ) -> Result<Address, ChainError> {
        let state = self.state.read().await;
        let contract = state
            .ticket_contracts
            .get(&nft_address)
            .ok_or(ChainError::UnknownContract(nft_address))?;
        contract
            .tokens
            .get(token_id as usize)
            .map(|t| t.owner)
            .ok_or(ChainError::UnknownToken(token_id))
    }

    /// Metadata locator of a token.
    pub(crate) async fn token_uri(
        &self,
        nft_address: Address,
        token_id: u64,
    ) -> Result<String, ChainError> {
        let state = self.state.read().await;
        let contract = state
            .ticket_contracts
            .get(&nft_address)
            .ok_or(ChainError::UnknownContract(nft_address))?;
        contract
            .tokens
            .get(token_id as usize)
            .map(|t| t.uri.clone())
            .ok_or(ChainError::UnknownToken(token_id))
    }

    /// Number of tokens owned by `owner` on a ticket contract.
    pub(crate) async fn balance_of(
        &self,
        nft_address: Address,
        owner: Address,
    ) -> Result<u64, ChainError> {
        let state = self.state.read().await;
        state
            .ticket_contracts
            .get(&nft_address)
            .map(|c| c.balances.get(&owner).copied().unwrap_or(0))
            .ok_or(ChainError::UnknownContract(nft_address))
    }

    // ── Marketplace writes ──────────────────────────────────────────────

    /// Registers an event and deploys its ticket contract.
    ///
    /// Output: `(event_id, ticket_nft_address)`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) async fn create_event(
        &self,
        marketplace: Address,
        caller: Address,
        name: String,
        description: String,
        ticket_price: u128,
        max_tickets: u64,
        image_uri: String,
        event_details: String,
    ) -> PendingTx<(u64, Address)> {
        if let Err(err) = self.require_marketplace(marketplace) {
            return PendingTx::sealed(Err(err));
        }
        let mut state = self.state.write().await;
        let result = (|| {
            state.require_account(caller)?;
            if max_tickets == 0 {
                return Err(ChainError::Reverted("max tickets must be positive".to_string()));
            }
            let nft_address = state.fresh_address();
            let event_id = state.events.len() as u64;
            state.events.push(EventRecord {
                id: event_id,
                name,
                description,
                ticket_price,
                max_tickets,
                image_uri,
                ticket_nft_address: nft_address,
                event_details,
            });
            state.ticket_contracts.insert(
                nft_address,
                TicketContractState {
                    max_tickets,
                    tokens: Vec::new(),
                    balances: HashMap::new(),
                    approvals: HashMap::new(),
                },
            );
            Ok((event_id, nft_address))
        })();
        Self::seal(&mut state, result)
    }

    /// Lists a ticket for resale.
    ///
    /// Requires the caller to own the token and to have approved the
    /// marketplace for it.
    pub(crate) async fn list_ticket(
        &self,
        marketplace: Address,
        caller: Address,
        ticket_id: u64,
        price: u128,
        nft_address: Address,
    ) -> PendingTx<()> {
        if let Err(err) = self.require_marketplace(marketplace) {
            return PendingTx::sealed(Err(err));
        }
        let marketplace_addr = self.marketplace_address;
        let mut state = self.state.write().await;
        let result = (|| {
            state.require_account(caller)?;
            let contract = state
                .ticket_contracts
                .get(&nft_address)
                .ok_or(ChainError::UnknownContract(nft_address))?;
            let token = contract
                .tokens
                .get(ticket_id as usize)
                .ok_or(ChainError::UnknownToken(ticket_id))?;
            if token.owner != caller {
                return Err(ChainError::Reverted(
                    "caller does not own ticket".to_string(),
                ));
            }
            if contract.approvals.get(&ticket_id) != Some(&marketplace_addr) {
                return Err(ChainError::Reverted(
                    "marketplace not approved for ticket".to_string(),
                ));
            }
            if price == 0 {
                return Err(ChainError::Reverted("price must be positive".to_string()));
            }
            if state
                .listings
                .get(&ticket_id)
                .is_some_and(|l| !l.is_sold)
            {
                return Err(ChainError::AlreadyListed(ticket_id));
            }
            state.listings.insert(
                ticket_id,
                Listing {
                    ticket_id,
                    nft_address,
                    seller: caller,
                    price,
                    is_sold: false,
                },
            );
            Ok(())
        })();
        Self::seal(&mut state, result)
    }

    /// Purchases a listed ticket.
    ///
    /// The attached `value` must cover the asking price; it is debited from
    /// the buyer and credited to the seller, and the token moves via the
    /// marketplace's stored approval.
    pub(crate) async fn buy_ticket(
        &self,
        marketplace: Address,
        caller: Address,
        ticket_id: u64,
        value: u128,
    ) -> PendingTx<()> {
        if let Err(err) = self.require_marketplace(marketplace) {
            return PendingTx::sealed(Err(err));
        }
        let mut state = self.state.write().await;
        let result = (|| {
            state.require_account(caller)?;
            let listing = state
                .listings
                .get(&ticket_id)
                .cloned()
                .ok_or(ChainError::UnknownListing(ticket_id))?;
            if listing.is_sold {
                return Err(ChainError::Reverted("listing already sold".to_string()));
            }
            if value < listing.price {
                return Err(ChainError::Reverted(
                    "payment below asking price".to_string(),
                ));
            }
            let available = state.accounts.get(&caller).copied().unwrap_or(0);
            if available < value {
                return Err(ChainError::InsufficientFunds {
                    required: value,
                    available,
                });
            }

            // Move the token through the approval granted at listing time.
            let contract = state.ticket_contract_mut(listing.nft_address)?;
            let token = contract
                .tokens
                .get_mut(ticket_id as usize)
                .ok_or(ChainError::UnknownToken(ticket_id))?;
            if token.owner != listing.seller {
                return Err(ChainError::Reverted(
                    "seller no longer owns ticket".to_string(),
                ));
            }
            token.owner = caller;
            contract.approvals.remove(&ticket_id);
            if let Some(balance) = contract.balances.get_mut(&listing.seller) {
                *balance = balance.saturating_sub(1);
            }
            *contract.balances.entry(caller).or_insert(0) += 1;

            // Settle payment.
            if let Some(balance) = state.accounts.get_mut(&caller) {
                *balance -= value;
            }
            *state.accounts.entry(listing.seller).or_insert(0) += value;

            if let Some(listing) = state.listings.get_mut(&ticket_id) {
                listing.is_sold = true;
            }
            Ok(())
        })();
        Self::seal(&mut state, result)
    }

    // ── Ticket contract writes ──────────────────────────────────────────

    /// Mints the next token to `recipient` with the given metadata locator.
    ///
    /// Output: the new token id (equal to the minted count before the call).
    pub(crate) async fn mint_ticket(
        &self,
        nft_address: Address,
        caller: Address,
        recipient: Address,
        metadata_uri: String,
    ) -> PendingTx<u64> {
        let mut state = self.state.write().await;
        let result = (|| {
            state.require_account(caller)?;
            let contract = state.ticket_contract_mut(nft_address)?;
            if contract.tokens.len() as u64 >= contract.max_tickets {
                return Err(ChainError::Reverted("max tickets minted".to_string()));
            }
            let token_id = contract.tokens.len() as u64;
            contract.tokens.push(TokenState {
                owner: recipient,
                uri: metadata_uri,
            });
            *contract.balances.entry(recipient).or_insert(0) += 1;
            Ok(token_id)
        })();
        Self::seal(&mut state, result)
    }

    /// Mints the next token to `recipient`, composing the metadata locator
    /// as `<cid>/<token_id>.json` from the id assigned inside the
    /// transaction itself.
    ///
    /// The id read and the locator write happen under the same write lock,
    /// so concurrent mints can never store a locator naming another
    /// token's id.
    ///
    /// Output: `(token_id, metadata_uri)`.
    pub(crate) async fn mint_ticket_from_cid(
        &self,
        nft_address: Address,
        caller: Address,
        recipient: Address,
        cid: String,
    ) -> PendingTx<(u64, String)> {
        let mut state = self.state.write().await;
        let result = (|| {
            state.require_account(caller)?;
            let contract = state.ticket_contract_mut(nft_address)?;
            if contract.tokens.len() as u64 >= contract.max_tickets {
                return Err(ChainError::Reverted("max tickets minted".to_string()));
            }
            let token_id = contract.tokens.len() as u64;
            let metadata_uri = format!("{cid}/{token_id}.json");
            contract.tokens.push(TokenState {
                owner: recipient,
                uri: metadata_uri.clone(),
            });
            *contract.balances.entry(recipient).or_insert(0) += 1;
            Ok((token_id, metadata_uri))
        })();
        Self::seal(&mut state, result)
    }

    /// Approves `spender` to transfer one token.
    pub(crate) async fn approve(
        &self,
        nft_address: Address,
        caller: Address,
        spender: Address,
        token_id: u64,
    ) -> PendingTx<()> {
        let mut state = self.state.write().await;
        let result = (|| {
            state.require_account(caller)?;
            let contract = state.ticket_contract_mut(nft_address)?;
            let token = contract
                .tokens
                .get(token_id as usize)
                .ok_or(ChainError::UnknownToken(token_id))?;
            if token.owner != caller {
                return Err(ChainError::Reverted(
                    "caller is not token owner".to_string(),
                ));
            }
            contract.approvals.insert(token_id, spender);
            Ok(())
        })();
        Self::seal(&mut state, result)
    }

    /// Transfers a token from `from` to `to`.
    ///
    /// The caller must be the owner or the approved spender; any approval
    /// is cleared on transfer.
    pub(crate) async fn transfer_from(
        &self,
        nft_address: Address,
        caller: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> PendingTx<()> {
        let mut state = self.state.write().await;
        let result = (|| {
            state.require_account(caller)?;
            let contract = state.ticket_contract_mut(nft_address)?;
            let token = contract
                .tokens
                .get_mut(token_id as usize)
                .ok_or(ChainError::UnknownToken(token_id))?;
            if token.owner != from {
                return Err(ChainError::Reverted("from is not token owner".to_string()));
            }
            let approved = contract.approvals.get(&token_id) == Some(&caller);
            if caller != from && !approved {
                return Err(ChainError::Reverted(
                    "caller is neither owner nor approved".to_string(),
                ));
            }
            token.owner = to;
            contract.approvals.remove(&token_id);
            if let Some(balance) = contract.balances.get_mut(&from) {
                *balance = balance.saturating_sub(1);
            }
            *contract.balances.entry(to).or_insert(0) += 1;
            Ok(())
        })();
        Self::seal(&mut state, result)
    }
}

impl Default for ChainNode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

    async fn node_with_account() -> (Arc<ChainNode>, Address) {
        let node = Arc::new(ChainNode::new());
        let account = node.create_account(10 * ONE_ETHER).await;
        (node, account)
    }

    async fn create_event(node: &Arc<ChainNode>, host: Address, max_tickets: u64) -> (u64, Address) {
        let tx = node
            .create_event(
                node.marketplace_address(),
                host,
                "Concert".to_string(),
                "desc".to_string(),
                ONE_ETHER / 10,
                max_tickets,
                String::new(),
                "details".to_string(),
            )
            .await;
        let Ok((output, _)) = tx.wait().await else {
            panic!("create_event failed");
        };
        output
    }

    #[tokio::test]
    async fn connect_unknown_account_fails() {
        let node = Arc::new(ChainNode::new());
        let result = node.connect(Address::from_low_u64(99)).await;
        assert!(matches!(result, Err(ChainError::UnknownAccount(_))));
    }

    #[tokio::test]
    async fn event_ids_are_sequential() {
        let (node, host) = node_with_account().await;
        let (first, _) = create_event(&node, host, 10).await;
        let (second, _) = create_event(&node, host, 10).await;
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        let Ok(count) = node.event_counter(node.marketplace_address()).await else {
            panic!("event_counter failed");
        };
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn mint_assigns_next_token_id_and_enforces_cap() {
        let (node, host) = node_with_account().await;
        let (_, nft) = create_event(&node, host, 2).await;

        for expected in 0..2u64 {
            let tx = node
                .mint_ticket(nft, host, host, format!("cid/{expected}.json"))
                .await;
            let Ok((token_id, _)) = tx.wait().await else {
                panic!("mint failed");
            };
            assert_eq!(token_id, expected);
        }

        let tx = node.mint_ticket(nft, host, host, "cid/2.json".to_string()).await;
        let Err(err) = tx.wait().await else {
            panic!("expected cap revert");
        };
        assert!(matches!(err, ChainError::Reverted(_)));
    }

    #[tokio::test]
    async fn mint_from_cid_composes_locator_under_the_lock() {
        let (node, host) = node_with_account().await;
        let (_, nft) = create_event(&node, host, 5).await;

        for expected in 0..2u64 {
            let tx = node
                .mint_ticket_from_cid(nft, host, host, "Qmdoc".to_string())
                .await;
            let Ok(((token_id, uri), _)) = tx.wait().await else {
                panic!("mint failed");
            };
            assert_eq!(token_id, expected);
            assert_eq!(uri, format!("Qmdoc/{expected}.json"));
            assert_eq!(node.token_uri(nft, token_id).await.ok(), Some(uri));
        }
    }

    #[tokio::test]
    async fn relisting_an_unsold_ticket_is_rejected() {
        let (node, seller) = node_with_account().await;
        let (_, nft) = create_event(&node, seller, 5).await;
        let _ = node
            .mint_ticket(nft, seller, seller, "cid/0.json".to_string())
            .await
            .wait()
            .await;
        let marketplace = node.marketplace_address();
        let _ = node.approve(nft, seller, marketplace, 0).await.wait().await;
        let _ = node
            .list_ticket(marketplace, seller, 0, ONE_ETHER, nft)
            .await
            .wait()
            .await;

        let tx = node
            .list_ticket(marketplace, seller, 0, 2 * ONE_ETHER, nft)
            .await;
        let Err(err) = tx.wait().await else {
            panic!("expected conflict");
        };
        assert_eq!(err, ChainError::AlreadyListed(0));
    }

    #[tokio::test]
    async fn transfer_moves_ownership_and_balances() {
        let (node, host) = node_with_account().await;
        let other = node.create_account(ONE_ETHER).await;
        let (_, nft) = create_event(&node, host, 5).await;
        let _ = node
            .mint_ticket(nft, host, host, "cid/0.json".to_string())
            .await
            .wait()
            .await;

        let tx = node.transfer_from(nft, host, host, other, 0).await;
        assert!(tx.wait().await.is_ok());

        assert_eq!(node.owner_of(nft, 0).await.ok(), Some(other));
        assert_eq!(node.balance_of(nft, host).await.ok(), Some(0));
        assert_eq!(node.balance_of(nft, other).await.ok(), Some(1));
        assert_eq!(node.total_minted(nft).await.ok(), Some(1));
    }

    #[tokio::test]
    async fn transfer_requires_owner_or_approval() {
        let (node, host) = node_with_account().await;
        let other = node.create_account(ONE_ETHER).await;
        let (_, nft) = create_event(&node, host, 5).await;
        let _ = node
            .mint_ticket(nft, host, host, "cid/0.json".to_string())
            .await
            .wait()
            .await;

        let tx = node.transfer_from(nft, other, host, other, 0).await;
        let Err(err) = tx.wait().await else {
            panic!("expected revert");
        };
        assert!(matches!(err, ChainError::Reverted(_)));

        let _ = node.approve(nft, host, other, 0).await.wait().await;
        let tx = node.transfer_from(nft, other, host, other, 0).await;
        assert!(tx.wait().await.is_ok());
    }

    #[tokio::test]
    async fn buy_settles_payment_and_marks_sold() {
        let (node, seller) = node_with_account().await;
        let buyer = node.create_account(ONE_ETHER).await;
        let (_, nft) = create_event(&node, seller, 5).await;
        let _ = node
            .mint_ticket(nft, seller, seller, "cid/0.json".to_string())
            .await
            .wait()
            .await;
        let marketplace = node.marketplace_address();
        let _ = node.approve(nft, seller, marketplace, 0).await.wait().await;
        let price = ONE_ETHER / 5;
        let _ = node
            .list_ticket(marketplace, seller, 0, price, nft)
            .await
            .wait()
            .await;

        let Ok(listing) = node.listing(marketplace, 0).await else {
            panic!("listing missing");
        };
        assert!(!listing.is_sold);

        let seller_before = node.account_balance(seller).await.unwrap_or(0);
        let tx = node.buy_ticket(marketplace, buyer, 0, price).await;
        assert!(tx.wait().await.is_ok());

        let Ok(listing) = node.listing(marketplace, 0).await else {
            panic!("listing missing");
        };
        assert!(listing.is_sold);
        assert_eq!(node.owner_of(nft, 0).await.ok(), Some(buyer));
        assert_eq!(
            node.account_balance(seller).await.ok(),
            Some(seller_before + price)
        );
        assert_eq!(
            node.account_balance(buyer).await.ok(),
            Some(ONE_ETHER - price)
        );
    }

    #[tokio::test]
    async fn buy_with_insufficient_balance_fails() {
        let (node, seller) = node_with_account().await;
        let broke = node.create_account(0).await;
        let (_, nft) = create_event(&node, seller, 5).await;
        let _ = node
            .mint_ticket(nft, seller, seller, "cid/0.json".to_string())
            .await
            .wait()
            .await;
        let marketplace = node.marketplace_address();
        let _ = node.approve(nft, seller, marketplace, 0).await.wait().await;
        let _ = node
            .list_ticket(marketplace, seller, 0, ONE_ETHER, nft)
            .await
            .wait()
            .await;

        let tx = node.buy_ticket(marketplace, broke, 0, ONE_ETHER).await;
        let Err(err) = tx.wait().await else {
            panic!("expected failure");
        };
        assert!(matches!(err, ChainError::InsufficientFunds { .. }));
    }

    #[tokio::test]
    async fn validate_ticket_checks_existence() {
        let (node, host) = node_with_account().await;
        let (_, nft) = create_event(&node, host, 5).await;
        let _ = node
            .mint_ticket(nft, host, host, "cid/0.json".to_string())
            .await
            .wait()
            .await;

        assert!(node.validate_ticket(nft, 0).await);
        assert!(!node.validate_ticket(nft, 999).await);
        assert!(!node.validate_ticket(Address::from_low_u64(77), 0).await);
    }

    #[tokio::test]
    async fn failed_transactions_do_not_advance_the_block() {
        let (node, host) = node_with_account().await;
        let before = node.block_number().await;
        let tx = node
            .mint_ticket(Address::from_low_u64(50), host, host, "x".to_string())
            .await;
        assert!(tx.wait().await.is_err());
        assert_eq!(node.block_number().await, before);
    }
}

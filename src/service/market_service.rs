//! Market service: orchestrates wallet, contract, and content operations.

use std::sync::Arc;

use futures_util::future::try_join_all;

use crate::chain::{Address, ChainNode, Marketplace, TicketNft, TxReceipt};
use crate::domain::{EventRecord, Listing, OwnedTicket, TicketMetadata};
use crate::error::GatewayError;
use crate::storage::ContentStore;

/// Validated input for the event creation flow.
#[derive(Debug, Clone)]
pub struct CreateEventInput {
    /// Account registering the event (pays for the transaction).
    pub host: Address,
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Ticket price in wei.
    pub ticket_price: u128,
    /// Maximum number of tickets.
    pub max_tickets: u64,
    /// CID of a previously uploaded image, if any.
    pub image_cid: Option<String>,
    /// Free-form details string.
    pub event_details: String,
}

/// Confirmed outcome of the event creation flow.
#[derive(Debug, Clone)]
pub struct CreatedEvent {
    /// Contract-assigned event id.
    pub event_id: u64,
    /// Address of the freshly deployed ticket contract.
    pub ticket_nft_address: Address,
    /// Confirmation receipt.
    pub receipt: TxReceipt,
}

/// Confirmed outcome of the minting flow.
#[derive(Debug, Clone)]
pub struct MintedTicket {
    /// Token id assigned by the ticket contract.
    pub token_id: u64,
    /// Metadata locator stored on the token.
    pub metadata_uri: String,
    /// Confirmation receipt.
    pub receipt: TxReceipt,
}

/// Orchestration layer for all marketplace operations.
///
/// Stateless coordinator: owns the [`ChainNode`] handle for contract state
/// and the [`ContentStore`] for images and metadata documents. Every write
/// method follows the pattern: connect wallet → bind contract → submit →
/// `wait()` for confirmation → return the confirmed outcome. Success is
/// never reported before confirmation.
#[derive(Debug, Clone)]
pub struct MarketService {
    node: Arc<ChainNode>,
    content: Arc<ContentStore>,
}

impl MarketService {
    /// Creates a new `MarketService`.
    #[must_use]
    pub fn new(node: Arc<ChainNode>, content: Arc<ContentStore>) -> Self {
        Self { node, content }
    }

    /// Returns a reference to the inner [`ChainNode`].
    #[must_use]
    pub fn node(&self) -> &Arc<ChainNode> {
        &self.node
    }

    /// Returns a reference to the inner [`ContentStore`].
    #[must_use]
    pub fn content(&self) -> &Arc<ContentStore> {
        &self.content
    }

    fn marketplace(&self) -> Marketplace {
        Marketplace::attach(Arc::clone(&self.node), self.node.marketplace_address())
    }

    fn ticket_nft(&self, address: Address) -> TicketNft {
        TicketNft::attach(Arc::clone(&self.node), address)
    }

    // ── Catalog ─────────────────────────────────────────────────────────

    /// Fetches all registered events in creation order.
    ///
    /// Reads the event counter, then issues one independent read per index
    /// concurrently. Results are assembled by the index they were issued
    /// against, so creation order is preserved regardless of completion
    /// order. All-or-nothing: one failed read fails the whole fetch rather
    /// than returning a partial catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if any individual read fails.
    pub async fn catalog(&self) -> Result<Vec<EventRecord>, GatewayError> {
        let marketplace = self.marketplace();
        let count = marketplace.event_counter().await?;
        let reads = (0..count).map(|index| marketplace.events(index));
        let events = try_join_all(reads).await?;
        Ok(events)
    }

    /// Fetches a single event record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EventNotFound`] for out-of-range ids.
    pub async fn event(&self, event_id: u64) -> Result<EventRecord, GatewayError> {
        Ok(self.marketplace().events(event_id).await?)
    }

    // ── Event creation flow ─────────────────────────────────────────────

    /// Registers a new event, deploying its ticket contract.
    ///
    /// An uploaded image CID must already be available; it is rendered as
    /// a gateway URL before the create transaction is submitted, so an
    /// event is never created with a dangling image reference.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] when required fields are
    /// missing, or a chain error from submission/confirmation.
    pub async fn create_event(
        &self,
        input: CreateEventInput,
    ) -> Result<CreatedEvent, GatewayError> {
        if input.name.trim().is_empty() {
            return Err(GatewayError::InvalidRequest("name is required".to_string()));
        }
        if input.description.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "description is required".to_string(),
            ));
        }
        if input.ticket_price == 0 {
            return Err(GatewayError::InvalidRequest(
                "ticket price must be positive".to_string(),
            ));
        }
        if input.max_tickets == 0 {
            return Err(GatewayError::InvalidRequest(
                "max tickets must be at least 1".to_string(),
            ));
        }

        let wallet = self.node.connect(input.host).await?;
        let image_uri = input
            .image_cid
            .as_deref()
            .map(|cid| self.content.url(cid))
            .unwrap_or_default();

        let tx = self
            .marketplace()
            .connect(&wallet)
            .create_event(
                &input.name,
                &input.description,
                input.ticket_price,
                input.max_tickets,
                &image_uri,
                &input.event_details,
            )
            .await?;
        let ((event_id, ticket_nft_address), receipt) = tx.wait().await?;

        tracing::info!(event_id, %ticket_nft_address, name = %input.name, "event created");
        Ok(CreatedEvent {
            event_id,
            ticket_nft_address,
            receipt,
        })
    }

    // ── Minting flow ────────────────────────────────────────────────────

    /// Mints a ticket for an event.
    ///
    /// The metadata locator suffix is the token id the contract assigns
    /// inside the mint transaction itself, so concurrent mints can never
    /// produce a locator naming another token's id. When no CID is
    /// supplied, a metadata document is composed from the event record
    /// and uploaded before the mint transaction is submitted.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the event is unknown, the wallet
    /// cannot be connected, or the transaction fails.
    pub async fn mint_ticket(
        &self,
        event_id: u64,
        from: Address,
        recipient: Option<Address>,
        metadata_cid: Option<String>,
    ) -> Result<MintedTicket, GatewayError> {
        let event = self.event(event_id).await?;
        let wallet = self.node.connect(from).await?;
        let recipient = recipient.unwrap_or(from);

        let nft = self.ticket_nft(event.ticket_nft_address).connect(&wallet);

        let cid = match metadata_cid {
            Some(cid) => cid,
            None => {
                let document = TicketMetadata {
                    name: event.name.clone(),
                    image: event.image_uri.clone(),
                    description: event.description.clone(),
                };
                let bytes = serde_json::to_vec(&document)
                    .map_err(|e| GatewayError::Internal(e.to_string()))?;
                self.content.upload(bytes).await
            }
        };

        let tx = nft.mint_ticket_from_cid(recipient, &cid).await?;
        let ((token_id, metadata_uri), receipt) = tx.wait().await?;

        tracing::info!(event_id, token_id, %recipient, "ticket minted");
        Ok(MintedTicket {
            token_id,
            metadata_uri,
            receipt,
        })
    }

    // ── Owned tickets ───────────────────────────────────────────────────

    /// Builds the owned-tickets list for an account.
    ///
    /// Walks every event, reads the minted count of its ticket contract,
    /// checks ownership per token, and joins matching tokens with their
    /// metadata documents. Sequential reads, full accumulation before
    /// returning; an unreachable or malformed document aborts the whole
    /// fetch rather than omitting an item.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MetadataFetch`] for bad metadata, or any
    /// chain read failure.
    pub async fn owned_tickets(&self, owner: Address) -> Result<Vec<OwnedTicket>, GatewayError> {
        let marketplace = self.marketplace();
        let count = marketplace.event_counter().await?;

        let mut owned = Vec::new();
        for index in 0..count {
            let event = marketplace.events(index).await?;
            let nft = self.ticket_nft(event.ticket_nft_address);
            let minted = nft.total_minted_tickets().await?;
            for token_id in 0..minted {
                if nft.owner_of(token_id).await? != owner {
                    continue;
                }
                let metadata_uri = nft.token_uri(token_id).await?;
                let bytes = self.content.fetch(&metadata_uri).await.ok_or_else(|| {
                    GatewayError::MetadataFetch(format!(
                        "metadata document unreachable: {metadata_uri}"
                    ))
                })?;
                let metadata: TicketMetadata = serde_json::from_slice(&bytes).map_err(|e| {
                    GatewayError::MetadataFetch(format!(
                        "malformed metadata document {metadata_uri}: {e}"
                    ))
                })?;
                owned.push(OwnedTicket {
                    token_id,
                    event_id: event.id,
                    event_name: event.name.clone(),
                    nft_address: event.ticket_nft_address,
                    metadata_uri,
                    metadata,
                });
            }
        }
        Ok(owned)
    }

    // ── Wallet ──────────────────────────────────────────────────────────

    /// Wei balance of a known account.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::WalletNotConnected`] for unknown accounts.
    pub async fn balance(&self, address: Address) -> Result<u128, GatewayError> {
        let wallet = self.node.connect(address).await?;
        Ok(wallet.balance().await?)
    }

    /// All dev accounts with balances, in creation order.
    pub async fn accounts(&self) -> Vec<(Address, u128)> {
        self.node.accounts().await
    }

    // ── Content ─────────────────────────────────────────────────────────

    /// Uploads bytes to the content store, returning `(cid, gateway_url)`.
    pub async fn upload_content(&self, bytes: Vec<u8>) -> (String, String) {
        let cid = self.content.upload(bytes).await;
        let url = self.content.url(&cid);
        (cid, url)
    }

    // ── Resale listings ─────────────────────────────────────────────────

    /// Fetches the listing for a ticket id.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ListingNotFound`] when never listed.
    pub async fn listing(&self, ticket_id: u64) -> Result<Listing, GatewayError> {
        Ok(self.marketplace().listings(ticket_id).await?)
    }

    /// Lists a ticket for resale.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the caller does not own the ticket
    /// or has not approved the marketplace.
    pub async fn list_ticket(
        &self,
        from: Address,
        ticket_id: u64,
        price: u128,
        nft_address: Address,
    ) -> Result<TxReceipt, GatewayError> {
        let wallet = self.node.connect(from).await?;
        let tx = self
            .marketplace()
            .connect(&wallet)
            .list_ticket(ticket_id, price, nft_address)
            .await?;
        let ((), receipt) = tx.wait().await?;
        tracing::info!(ticket_id, price, %from, "ticket listed");
        Ok(receipt)
    }

    /// Purchases a listed ticket. When `value` is omitted the asking price
    /// is attached.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] for missing/sold listings, insufficient
    /// payment, or insufficient funds.
    pub async fn buy_ticket(
        &self,
        from: Address,
        ticket_id: u64,
        value: Option<u128>,
    ) -> Result<TxReceipt, GatewayError> {
        let marketplace = self.marketplace();
        let value = match value {
            Some(v) => v,
            None => marketplace.listings(ticket_id).await?.price,
        };
        let wallet = self.node.connect(from).await?;
        let tx = marketplace
            .connect(&wallet)
            .buy_ticket(ticket_id, value)
            .await?;
        let ((), receipt) = tx.wait().await?;
        tracing::info!(ticket_id, value, %from, "ticket purchased");
        Ok(receipt)
    }

    // ── Transfers and validation ────────────────────────────────────────

    /// Approves a spender for one token.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the caller is not the owner.
    pub async fn approve_ticket(
        &self,
        from: Address,
        nft_address: Address,
        spender: Address,
        token_id: u64,
    ) -> Result<TxReceipt, GatewayError> {
        let wallet = self.node.connect(from).await?;
        let tx = self
            .ticket_nft(nft_address)
            .connect(&wallet)
            .approve(spender, token_id)
            .await?;
        let ((), receipt) = tx.wait().await?;
        Ok(receipt)
    }

    /// Transfers a ticket to another account.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the caller is neither owner nor
    /// approved.
    pub async fn transfer_ticket(
        &self,
        from: Address,
        nft_address: Address,
        to: Address,
        token_id: u64,
    ) -> Result<TxReceipt, GatewayError> {
        let wallet = self.node.connect(from).await?;
        let tx = self
            .ticket_nft(nft_address)
            .connect(&wallet)
            .transfer_from(from, to, token_id)
            .await?;
        let ((), receipt) = tx.wait().await?;
        tracing::info!(token_id, %from, %to, "ticket transferred");
        Ok(receipt)
    }

    /// Authenticity check for a ticket id on a given contract.
    pub async fn validate_ticket(&self, nft_address: Address, token_id: u64) -> bool {
        self.marketplace()
            .validate_ticket(token_id, nft_address)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::chain::units;

    async fn make_service() -> (MarketService, Address) {
        let node = Arc::new(ChainNode::new());
        let account = node.create_account(units::WEI_PER_ETHER * 100).await;
        let content = Arc::new(ContentStore::new("gateway.test"));
        (MarketService::new(node, content), account)
    }

    fn event_input(host: Address, name: &str) -> CreateEventInput {
        CreateEventInput {
            host,
            name: name.to_string(),
            description: "An amazing event".to_string(),
            ticket_price: units::WEI_PER_ETHER / 10,
            max_tickets: 100,
            image_cid: None,
            event_details: "details".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_catalog_is_ok() {
        let (service, _) = make_service().await;
        let Ok(catalog) = service.catalog().await else {
            panic!("catalog failed");
        };
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn catalog_preserves_creation_order() {
        let (service, host) = make_service().await;
        for name in ["first", "second", "third"] {
            let result = service.create_event(event_input(host, name)).await;
            assert!(result.is_ok());
        }

        let Ok(catalog) = service.catalog().await else {
            panic!("catalog failed");
        };
        let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);

        // Unchanged chain state yields an identical ordered result.
        let Ok(again) = service.catalog().await else {
            panic!("catalog refetch failed");
        };
        assert_eq!(catalog, again);
    }

    #[tokio::test]
    async fn create_event_requires_fields() {
        let (service, host) = make_service().await;
        let mut input = event_input(host, "");
        let result = service.create_event(input.clone()).await;
        assert!(matches!(result, Err(GatewayError::InvalidRequest(_))));

        input.name = "ok".to_string();
        input.max_tickets = 0;
        let result = service.create_event(input).await;
        assert!(matches!(result, Err(GatewayError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn mint_derives_locator_from_assigned_token_id() {
        let (service, host) = make_service().await;
        let Ok(created) = service.create_event(event_input(host, "concert")).await else {
            panic!("create failed");
        };

        let Ok(first) = service.mint_ticket(created.event_id, host, None, None).await else {
            panic!("first mint failed");
        };
        let Ok(second) = service.mint_ticket(created.event_id, host, None, None).await else {
            panic!("second mint failed");
        };

        assert_eq!(first.token_id, 0);
        assert_eq!(second.token_id, 1);
        assert!(first.metadata_uri.ends_with("/0.json"));
        assert!(second.metadata_uri.ends_with("/1.json"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_mints_keep_locators_aligned_with_token_ids() {
        let (service, host) = make_service().await;
        let Ok(created) = service.create_event(event_input(host, "concert")).await else {
            panic!("create failed");
        };

        let service = Arc::new(service);
        let mut handles = Vec::new();
        for _ in 0..16 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service.mint_ticket(created.event_id, host, None, None).await
            }));
        }
        for handle in handles {
            let Ok(result) = handle.await else {
                panic!("mint task panicked");
            };
            assert!(result.is_ok());
        }

        // Every stored locator must name the token it is stored on.
        let nft = TicketNft::attach(Arc::clone(service.node()), created.ticket_nft_address);
        let Ok(minted) = nft.total_minted_tickets().await else {
            panic!("total_minted failed");
        };
        assert_eq!(minted, 16);
        for token_id in 0..minted {
            let Ok(uri) = nft.token_uri(token_id).await else {
                panic!("token_uri failed");
            };
            assert!(
                uri.ends_with(&format!("/{token_id}.json")),
                "token {token_id} stores locator {uri}"
            );
        }
    }

    #[tokio::test]
    async fn owned_tickets_joins_event_and_metadata() {
        let (service, host) = make_service().await;
        let other = service.node().create_account(units::WEI_PER_ETHER).await;
        let Ok(created) = service.create_event(event_input(host, "concert")).await else {
            panic!("create failed");
        };
        let minted = service
            .mint_ticket(created.event_id, host, Some(other), None)
            .await;
        assert!(minted.is_ok());

        let Ok(owned) = service.owned_tickets(other).await else {
            panic!("owned_tickets failed");
        };
        assert_eq!(owned.len(), 1);
        let Some(ticket) = owned.first() else {
            panic!("missing ticket");
        };
        assert_eq!(ticket.event_name, "concert");
        assert_eq!(ticket.metadata.description, "An amazing event");

        let Ok(none) = service.owned_tickets(host).await else {
            panic!("owned_tickets failed");
        };
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn owned_tickets_aborts_on_unreachable_metadata() {
        let (service, host) = make_service().await;
        let Ok(created) = service.create_event(event_input(host, "concert")).await else {
            panic!("create failed");
        };
        // Mint through the binding with a locator no store entry backs.
        let Ok(wallet) = service.node().connect(host).await else {
            panic!("connect failed");
        };
        let nft = TicketNft::attach(
            Arc::clone(service.node()),
            created.ticket_nft_address,
        )
        .connect(&wallet);
        let Ok(tx) = nft.mint_ticket(host, "Qmnowhere/0.json").await else {
            panic!("mint submit failed");
        };
        assert!(tx.wait().await.is_ok());

        let result = service.owned_tickets(host).await;
        assert!(matches!(result, Err(GatewayError::MetadataFetch(_))));
    }

    #[tokio::test]
    async fn list_and_buy_round_trip() {
        let (service, seller) = make_service().await;
        let buyer = service.node().create_account(units::WEI_PER_ETHER * 10).await;
        let Ok(created) = service.create_event(event_input(seller, "concert")).await else {
            panic!("create failed");
        };
        let Ok(minted) = service
            .mint_ticket(created.event_id, seller, None, None)
            .await
        else {
            panic!("mint failed");
        };

        let marketplace_address = service.node().marketplace_address();
        let approved = service
            .approve_ticket(
                seller,
                created.ticket_nft_address,
                marketplace_address,
                minted.token_id,
            )
            .await;
        assert!(approved.is_ok());

        let price = units::WEI_PER_ETHER / 5;
        let listed = service
            .list_ticket(seller, minted.token_id, price, created.ticket_nft_address)
            .await;
        assert!(listed.is_ok());

        let Ok(listing) = service.listing(minted.token_id).await else {
            panic!("listing fetch failed");
        };
        assert!(!listing.is_sold);

        let bought = service.buy_ticket(buyer, minted.token_id, None).await;
        assert!(bought.is_ok());

        let Ok(listing) = service.listing(minted.token_id).await else {
            panic!("listing fetch failed");
        };
        assert!(listing.is_sold);
    }

    #[tokio::test]
    async fn balance_of_unknown_wallet_is_connection_error() {
        let (service, _) = make_service().await;
        let result = service.balance(Address::from_low_u64(4242)).await;
        assert!(matches!(result, Err(GatewayError::WalletNotConnected(_))));
    }
}

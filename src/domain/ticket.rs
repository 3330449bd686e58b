//! Ticket metadata documents and the owned-ticket composite record.

use serde::{Deserialize, Serialize};

use crate::chain::Address;

/// JSON metadata document referenced by a ticket's `token_uri`.
///
/// By convention the document carries at least `image` and `description`;
/// anything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketMetadata {
    /// Display name, usually the event name.
    #[serde(default)]
    pub name: String,
    /// Content locator for the ticket image.
    #[serde(default)]
    pub image: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

/// Composite record assembled for the owned-tickets view.
///
/// Joins a token's on-chain ownership with its metadata document and the
/// issuing event's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedTicket {
    /// Token id within the event's ticket contract.
    pub token_id: u64,
    /// Id of the issuing event.
    pub event_id: u64,
    /// Name of the issuing event.
    pub event_name: String,
    /// Ticket contract address.
    pub nft_address: Address,
    /// Metadata locator stored on-chain.
    pub metadata_uri: String,
    /// Fields fetched from the metadata document.
    pub metadata: TicketMetadata,
}

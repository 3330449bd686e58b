//! Event-related DTOs for create, get, and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::TxReceiptDto;
use crate::chain::{Address, units};
use crate::domain::EventRecord;

/// Event representation returned by catalog and detail endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventDto {
    /// Contract-assigned event id.
    pub id: u64,
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Ticket price in wei, as a decimal string.
    pub ticket_price_wei: String,
    /// Ticket price in ether, as a decimal string.
    pub ticket_price_eth: String,
    /// Maximum number of tickets.
    pub max_tickets: u64,
    /// Image URL, empty when the event has none.
    pub image_uri: String,
    /// Address of the event's ticket contract.
    #[schema(value_type = String)]
    pub ticket_nft_address: Address,
    /// Free-form details string.
    pub event_details: String,
}

impl From<EventRecord> for EventDto {
    fn from(event: EventRecord) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            ticket_price_wei: event.ticket_price.to_string(),
            ticket_price_eth: units::format_ether(event.ticket_price),
            max_tickets: event.max_tickets,
            image_uri: event.image_uri,
            ticket_nft_address: event.ticket_nft_address,
            event_details: event.event_details,
        }
    }
}

/// Request body for `POST /events`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Account registering the event.
    #[schema(value_type = String)]
    pub host: Address,
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Ticket price in ether, as a decimal string (e.g. `"0.1"`).
    pub ticket_price_eth: String,
    /// Maximum number of tickets (must be at least 1).
    pub max_tickets: u64,
    /// CID of a previously uploaded image.
    #[serde(default)]
    pub image_cid: Option<String>,
    /// Free-form details string.
    #[serde(default)]
    pub event_details: String,
}

/// Response body for `POST /events` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateEventResponse {
    /// Contract-assigned event id.
    pub event_id: u64,
    /// Address of the freshly deployed ticket contract.
    #[schema(value_type = String)]
    pub ticket_nft_address: Address,
    /// Confirmation receipt.
    pub receipt: TxReceiptDto,
}

/// Catalog response for `GET /events`.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventListResponse {
    /// Events in creation order.
    pub data: Vec<EventDto>,
    /// Total number of registered events.
    pub total: u64,
}

//! Ticket DTOs: minting, transfers, approvals, and validation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::TxReceiptDto;
use crate::chain::Address;
use crate::domain::OwnedTicket;

/// Request body for `POST /events/{id}/tickets`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MintTicketRequest {
    /// Account paying for the mint.
    #[schema(value_type = String)]
    pub from: Address,
    /// Recipient of the ticket. Defaults to `from` when omitted.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub recipient: Option<Address>,
    /// CID of a pre-uploaded metadata directory. When omitted a metadata
    /// document is composed from the event record and uploaded.
    #[serde(default)]
    pub metadata_cid: Option<String>,
}

/// Response body for `POST /events/{id}/tickets` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct MintTicketResponse {
    /// Event the ticket belongs to.
    pub event_id: u64,
    /// Token id assigned by the ticket contract.
    pub token_id: u64,
    /// Metadata locator stored on the token.
    pub metadata_uri: String,
    /// Confirmation receipt.
    pub receipt: TxReceiptDto,
}

/// Request body for `POST /tickets/{nft_address}/{token_id}/transfer`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferTicketRequest {
    /// Current owner (or approved operator) signing the transfer.
    #[schema(value_type = String)]
    pub from: Address,
    /// Account receiving the ticket.
    #[schema(value_type = String)]
    pub to: Address,
}

/// Request body for `POST /tickets/{nft_address}/{token_id}/approve`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApproveTicketRequest {
    /// Token owner signing the approval.
    #[schema(value_type = String)]
    pub from: Address,
    /// Account being approved to move the token.
    #[schema(value_type = String)]
    pub spender: Address,
}

/// Response body for transfer and approve endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct TicketTxResponse {
    /// Confirmation receipt.
    pub receipt: TxReceiptDto,
}

/// Response body for `GET /tickets/{nft_address}/{token_id}/validate`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateTicketResponse {
    /// Whether the token was minted through a registered event contract.
    pub valid: bool,
}

/// Owned ticket with its joined metadata document.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OwnedTicketDto {
    /// Token id on the ticket contract.
    pub token_id: u64,
    /// Event the ticket belongs to.
    pub event_id: u64,
    /// Event name at the time of the query.
    pub event_name: String,
    /// Ticket contract address.
    #[schema(value_type = String)]
    pub nft_address: Address,
    /// Metadata locator stored on the token.
    pub metadata_uri: String,
    /// Ticket display name from the metadata document.
    pub name: String,
    /// Image URL from the metadata document.
    pub image: String,
    /// Description from the metadata document.
    pub description: String,
}

impl From<OwnedTicket> for OwnedTicketDto {
    fn from(ticket: OwnedTicket) -> Self {
        Self {
            token_id: ticket.token_id,
            event_id: ticket.event_id,
            event_name: ticket.event_name,
            nft_address: ticket.nft_address,
            metadata_uri: ticket.metadata_uri,
            name: ticket.metadata.name,
            image: ticket.metadata.image,
            description: ticket.metadata.description,
        }
    }
}

/// Response body for `GET /wallets/{address}/tickets`.
#[derive(Debug, Serialize, ToSchema)]
pub struct OwnedTicketListResponse {
    /// Tickets in event-then-token order.
    pub data: Vec<OwnedTicketDto>,
    /// Total number of owned tickets.
    pub total: u64,
}

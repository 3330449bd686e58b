//! Resale listing DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::TxReceiptDto;
use crate::chain::{Address, units};
use crate::domain::Listing;

/// Request body for `POST /listings`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateListingRequest {
    /// Ticket owner signing the listing.
    #[schema(value_type = String)]
    pub from: Address,
    /// Token id to list.
    pub ticket_id: u64,
    /// Asking price in ether, as a decimal string.
    pub price_eth: String,
    /// Ticket contract address.
    #[schema(value_type = String)]
    pub nft_address: Address,
}

/// Request body for `POST /listings/{ticket_id}/purchase`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BuyListingRequest {
    /// Buyer account.
    #[schema(value_type = String)]
    pub from: Address,
    /// Payment in ether, as a decimal string. Defaults to the asking
    /// price when omitted.
    #[serde(default)]
    pub value_eth: Option<String>,
}

/// Listing representation for detail and write responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListingDto {
    /// Token id the listing covers.
    pub ticket_id: u64,
    /// Ticket contract address.
    #[schema(value_type = String)]
    pub nft_address: Address,
    /// Account that listed the ticket.
    #[schema(value_type = String)]
    pub seller: Address,
    /// Asking price in wei, as a decimal string.
    pub price_wei: String,
    /// Asking price in ether, as a decimal string.
    pub price_eth: String,
    /// Whether the listing has been bought.
    pub is_sold: bool,
}

impl From<Listing> for ListingDto {
    fn from(listing: Listing) -> Self {
        Self {
            ticket_id: listing.ticket_id,
            nft_address: listing.nft_address,
            seller: listing.seller,
            price_wei: listing.price.to_string(),
            price_eth: units::format_ether(listing.price),
            is_sold: listing.is_sold,
        }
    }
}

/// Response body for listing writes (create and purchase).
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingTxResponse {
    /// Listing state after the transaction confirmed.
    pub listing: ListingDto,
    /// Confirmation receipt.
    pub receipt: TxReceiptDto,
}

//! Resale listing state held by the marketplace contract.

use crate::chain::Address;

/// A resale offer for an already-minted ticket.
///
/// Keyed by ticket id within the marketplace; mutated exactly once, to
/// `is_sold = true`, when the listing is purchased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Token id of the listed ticket.
    pub ticket_id: u64,
    /// Ticket contract the token belongs to.
    pub nft_address: Address,
    /// Account that listed the ticket and receives the sale proceeds.
    pub seller: Address,
    /// Asking price in wei.
    pub price: u128,
    /// Whether the listing has been purchased.
    pub is_sold: bool,
}

//! Event record as stored by the marketplace contract.

use crate::chain::Address;

/// A ticketed event registered in the marketplace.
///
/// Created once by `create_event` and immutable thereafter; identity is
/// the contract-assigned sequential `id`. Each event owns exactly one
/// ticket contract instance at `ticket_nft_address`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Sequential id assigned by the marketplace (creation order).
    pub id: u64,
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Ticket price in wei.
    pub ticket_price: u128,
    /// Maximum number of tickets the ticket contract will mint.
    pub max_tickets: u64,
    /// Content locator for the event image; empty when none was uploaded.
    pub image_uri: String,
    /// Address of the event's ticket contract.
    pub ticket_nft_address: Address,
    /// Free-form details string.
    pub event_details: String,
}

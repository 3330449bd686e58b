//! Domain layer: marketplace records and view sections.
//!
//! These types mirror what the contracts report: an event registered in
//! the marketplace, a resale listing, a ticket's metadata document, and
//! the composite owned-ticket record assembled for a wallet.

pub mod event_record;
pub mod listing;
pub mod section;
pub mod ticket;

pub use event_record::EventRecord;
pub use listing::Listing;
pub use section::Section;
pub use ticket::{OwnedTicket, TicketMetadata};

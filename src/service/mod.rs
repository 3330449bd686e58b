//! Service layer orchestrating the marketplace flows.

pub mod market_service;

pub use market_service::{CreateEventInput, CreatedEvent, MarketService, MintedTicket};

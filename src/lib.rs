//! # ticketplace-gateway
//!
//! REST API gateway for an NFT event-ticketing marketplace.
//!
//! This crate exposes the full ticket lifecycle (event creation, minting,
//! ownership queries, resale listings, and validation) over HTTP. All
//! contract state lives in an in-process chain node; this service is a
//! coordination layer that connects wallets, binds contracts, and maps
//! chain results onto REST responses.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── MarketService (service/)
//!     │
//!     ├── Contract Bindings: Marketplace, TicketNft (chain/)
//!     ├── ChainNode + Wallets (chain/)
//!     │
//!     └── ContentStore (storage/)
//! ```

pub mod api;
pub mod app_state;
pub mod chain;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod storage;

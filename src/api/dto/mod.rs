//! Data Transfer Objects for REST request/response serialization.
//!
//! All wei amounts are serialized as JSON strings to prevent precision
//! loss on u128 values; ether-denominated fields carry decimal strings.

pub mod common_dto;
pub mod event_dto;
pub mod listing_dto;
pub mod ticket_dto;
pub mod wallet_dto;

pub use common_dto::*;
pub use event_dto::*;
pub use listing_dto::*;
pub use ticket_dto::*;
pub use wallet_dto::*;

//! Chain layer: client adapter, contract bindings, and the dev node.
//!
//! This module plays the role an RPC provider plays for a browser dApp.
//! [`ChainNode`] holds authoritative contract state, [`Wallet`] is the
//! connected-signer capability, and [`Marketplace`] / [`TicketNft`] are
//! typed bindings over the two contract surfaces. Write calls return a
//! [`PendingTx`] whose `wait()` must be awaited before success may be
//! reported to a caller.

pub mod address;
pub mod marketplace;
pub mod node;
pub mod ticket_nft;
pub mod tx;
pub mod units;
pub mod wallet;

pub use address::Address;
pub use marketplace::Marketplace;
pub use node::ChainNode;
pub use ticket_nft::TicketNft;
pub use tx::{ChainError, PendingTx, TxHash, TxReceipt};
pub use wallet::Wallet;

//! Shared DTO types used across multiple endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::chain::TxReceipt;

/// Confirmation receipt included in every write response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TxReceiptDto {
    /// Transaction hash (`0x`-prefixed hex).
    pub tx_hash: String,
    /// Block the transaction was confirmed in.
    pub block_number: u64,
    /// Confirmation timestamp.
    pub confirmed_at: DateTime<Utc>,
}

impl From<TxReceipt> for TxReceiptDto {
    fn from(receipt: TxReceipt) -> Self {
        Self {
            tx_hash: receipt.tx_hash.to_string(),
            block_number: receipt.block_number,
            confirmed_at: receipt.confirmed_at,
        }
    }
}

/// Response body for `POST /content`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContentUploadResponse {
    /// Content identifier derived from the uploaded bytes.
    pub cid: String,
    /// Gateway URL for the uploaded content.
    pub url: String,
}

//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! Chain-layer failures convert via `From<ChainError>` so that every
//! handler can use `?` end to end; no error leaves a handler unconverted.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::chain::{Address, ChainError};

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "event not found: 7",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category              | HTTP Status                     |
/// |-----------|-----------------------|---------------------------------|
/// | 1000–1999 | Validation            | 400 Bad Request                 |
/// | 2000–2999 | Not Found             | 404 Not Found                   |
/// | 3000–3999 | Server / Content      | 500 / 502                       |
/// | 4000–4999 | Wallet & Transaction  | 401 / 402 / 409 / 422           |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed before any transaction was submitted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Event index is not registered in the marketplace.
    #[error("event not found: {0}")]
    EventNotFound(u64),

    /// No listing exists for the ticket id.
    #[error("listing not found for ticket: {0}")]
    ListingNotFound(u64),

    /// Token id does not exist on the ticket contract.
    #[error("ticket not found: {0}")]
    TicketNotFound(u64),

    /// No contract is deployed at the given address.
    #[error("contract not found: {0}")]
    ContractNotFound(Address),

    /// No wallet could be connected for the address.
    #[error("wallet not connected: {0}")]
    WalletNotConnected(String),

    /// Caller balance cannot cover the transaction value.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    /// The transaction conflicts with current chain state (e.g. an unsold
    /// listing already exists for the ticket).
    #[error("transaction rejected: {0}")]
    TransactionRejected(String),

    /// The contract rejected the transaction.
    #[error("transaction reverted: {0}")]
    TransactionReverted(String),

    /// A ticket metadata document was unreachable or malformed.
    #[error("metadata fetch failed: {0}")]
    MetadataFetch(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::EventNotFound(_) => 2001,
            Self::ListingNotFound(_) => 2002,
            Self::TicketNotFound(_) => 2003,
            Self::ContractNotFound(_) => 2004,
            Self::Internal(_) => 3000,
            Self::MetadataFetch(_) => 3002,
            Self::WalletNotConnected(_) => 4001,
            Self::InsufficientFunds(_) => 4002,
            Self::TransactionRejected(_) => 4003,
            Self::TransactionReverted(_) => 4004,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::EventNotFound(_)
            | Self::ListingNotFound(_)
            | Self::TicketNotFound(_)
            | Self::ContractNotFound(_) => StatusCode::NOT_FOUND,
            Self::WalletNotConnected(_) => StatusCode::UNAUTHORIZED,
            Self::InsufficientFunds(_) => StatusCode::PAYMENT_REQUIRED,
            Self::TransactionRejected(_) => StatusCode::CONFLICT,
            Self::TransactionReverted(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MetadataFetch(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ChainError> for GatewayError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::UnknownAccount(addr) => Self::WalletNotConnected(addr.to_string()),
            ChainError::NoSigner => {
                Self::WalletNotConnected("no signer attached to binding".to_string())
            }
            ChainError::UnknownContract(addr) => Self::ContractNotFound(addr),
            ChainError::UnknownEvent(id) => Self::EventNotFound(id),
            ChainError::UnknownToken(id) => Self::TicketNotFound(id),
            ChainError::UnknownListing(id) => Self::ListingNotFound(id),
            ChainError::AlreadyListed(id) => {
                Self::TransactionRejected(format!("ticket already listed: {id}"))
            }
            ChainError::InsufficientFunds {
                required,
                available,
            } => Self::InsufficientFunds(format!("need {required} wei, have {available} wei")),
            ChainError::Reverted(reason) => Self::TransactionReverted(reason),
            ChainError::InvalidAmount(value) => {
                Self::InvalidRequest(format!("invalid amount: {value}"))
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_errors_map_to_specific_variants() {
        let cases = [
            (
                ChainError::UnknownAccount(Address::from_low_u64(1)),
                StatusCode::UNAUTHORIZED,
            ),
            (ChainError::NoSigner, StatusCode::UNAUTHORIZED),
            (ChainError::UnknownEvent(3), StatusCode::NOT_FOUND),
            (ChainError::UnknownToken(3), StatusCode::NOT_FOUND),
            (ChainError::UnknownListing(3), StatusCode::NOT_FOUND),
            (ChainError::AlreadyListed(3), StatusCode::CONFLICT),
            (
                ChainError::InsufficientFunds {
                    required: 2,
                    available: 1,
                },
                StatusCode::PAYMENT_REQUIRED,
            ),
            (
                ChainError::Reverted("max tickets minted".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ChainError::InvalidAmount("abc".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (chain_err, expected) in cases {
            let gateway_err = GatewayError::from(chain_err);
            assert_eq!(gateway_err.status_code(), expected);
        }
    }

    #[test]
    fn error_codes_sit_in_documented_ranges() {
        assert_eq!(GatewayError::InvalidRequest(String::new()).error_code(), 1001);
        assert_eq!(GatewayError::EventNotFound(0).error_code(), 2001);
        assert_eq!(GatewayError::Internal(String::new()).error_code(), 3000);
        assert_eq!(
            GatewayError::WalletNotConnected(String::new()).error_code(),
            4001
        );
    }
}

//! Ticket handlers: transfer, approval, and authenticity validation.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    ApproveTicketRequest, TicketTxResponse, TransferTicketRequest, ValidateTicketResponse,
};
use crate::app_state::AppState;
use crate::chain::Address;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /tickets/:nft_address/:token_id/transfer` — Transfer a ticket.
///
/// # Errors
///
/// Returns [`GatewayError`] when the signer is neither owner nor an
/// approved operator.
#[utoipa::path(
    post,
    path = "/api/v1/tickets/{nft_address}/{token_id}/transfer",
    tag = "Tickets",
    summary = "Transfer a ticket",
    description = "Moves a ticket to another account. The signer must own the token or hold its approval.",
    params(
        ("nft_address" = String, Path, description = "Ticket contract address"),
        ("token_id" = u64, Path, description = "Token id"),
    ),
    request_body = TransferTicketRequest,
    responses(
        (status = 200, description = "Ticket transferred", body = TicketTxResponse),
        (status = 404, description = "Unknown contract or token", body = ErrorResponse),
        (status = 422, description = "Signer not authorized for token", body = ErrorResponse),
    )
)]
pub async fn transfer_ticket(
    State(state): State<AppState>,
    Path((nft_address, token_id)): Path<(Address, u64)>,
    Json(req): Json<TransferTicketRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let receipt = state
        .market
        .transfer_ticket(req.from, nft_address, req.to, token_id)
        .await?;
    Ok(Json(TicketTxResponse {
        receipt: receipt.into(),
    }))
}

/// `POST /tickets/:nft_address/:token_id/approve` — Approve a spender.
///
/// # Errors
///
/// Returns [`GatewayError`] when the signer does not own the token.
#[utoipa::path(
    post,
    path = "/api/v1/tickets/{nft_address}/{token_id}/approve",
    tag = "Tickets",
    summary = "Approve a spender for a ticket",
    description = "Grants one account the right to move a single token. Listing a ticket for resale requires approving the marketplace first.",
    params(
        ("nft_address" = String, Path, description = "Ticket contract address"),
        ("token_id" = u64, Path, description = "Token id"),
    ),
    request_body = ApproveTicketRequest,
    responses(
        (status = 200, description = "Spender approved", body = TicketTxResponse),
        (status = 404, description = "Unknown contract or token", body = ErrorResponse),
        (status = 422, description = "Signer is not the owner", body = ErrorResponse),
    )
)]
pub async fn approve_ticket(
    State(state): State<AppState>,
    Path((nft_address, token_id)): Path<(Address, u64)>,
    Json(req): Json<ApproveTicketRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let receipt = state
        .market
        .approve_ticket(req.from, nft_address, req.spender, token_id)
        .await?;
    Ok(Json(TicketTxResponse {
        receipt: receipt.into(),
    }))
}

/// `GET /tickets/:nft_address/:token_id/validate` — Authenticity check.
#[utoipa::path(
    get,
    path = "/api/v1/tickets/{nft_address}/{token_id}/validate",
    tag = "Tickets",
    summary = "Validate a ticket",
    description = "Checks that a token was minted through a registered event contract. Unknown tokens and contracts yield `valid: false`, never an error.",
    params(
        ("nft_address" = String, Path, description = "Ticket contract address"),
        ("token_id" = u64, Path, description = "Token id"),
    ),
    responses(
        (status = 200, description = "Validation result", body = ValidateTicketResponse),
    )
)]
pub async fn validate_ticket(
    State(state): State<AppState>,
    Path((nft_address, token_id)): Path<(Address, u64)>,
) -> impl IntoResponse {
    let valid = state.market.validate_ticket(nft_address, token_id).await;
    Json(ValidateTicketResponse { valid })
}

/// Ticket routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tickets/{nft_address}/{token_id}/transfer",
            post(transfer_ticket),
        )
        .route(
            "/tickets/{nft_address}/{token_id}/approve",
            post(approve_ticket),
        )
        .route(
            "/tickets/{nft_address}/{token_id}/validate",
            get(validate_ticket),
        )
}

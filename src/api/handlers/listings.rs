//! Resale listing handlers: create, get, purchase.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{BuyListingRequest, CreateListingRequest, ListingDto, ListingTxResponse};
use crate::app_state::AppState;
use crate::chain::units;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /listings` — List a ticket for resale.
///
/// # Errors
///
/// Returns [`GatewayError`] when the signer does not own the ticket, the
/// marketplace lacks approval, or the price is not positive.
#[utoipa::path(
    post,
    path = "/api/v1/listings",
    tag = "Listings",
    summary = "List a ticket for resale",
    description = "Creates a resale listing. The seller must own the ticket and must have approved the marketplace for the token beforehand.",
    request_body = CreateListingRequest,
    responses(
        (status = 201, description = "Listing created", body = ListingTxResponse),
        (status = 400, description = "Invalid price", body = ErrorResponse),
        (status = 409, description = "Ticket already listed", body = ErrorResponse),
        (status = 422, description = "Seller not authorized", body = ErrorResponse),
    )
)]
pub async fn create_listing(
    State(state): State<AppState>,
    Json(req): Json<CreateListingRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let price = units::parse_ether(&req.price_eth)?;
    let receipt = state
        .market
        .list_ticket(req.from, req.ticket_id, price, req.nft_address)
        .await?;
    let listing = state.market.listing(req.ticket_id).await?;

    let response = ListingTxResponse {
        listing: ListingDto::from(listing),
        receipt: receipt.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /listings/:ticket_id` — Listing detail.
///
/// # Errors
///
/// Returns [`GatewayError::ListingNotFound`] when the ticket was never
/// listed.
#[utoipa::path(
    get,
    path = "/api/v1/listings/{ticket_id}",
    tag = "Listings",
    summary = "Get a listing",
    description = "Returns the resale listing for a ticket id, including sold status.",
    params(
        ("ticket_id" = u64, Path, description = "Token id the listing covers"),
    ),
    responses(
        (status = 200, description = "Listing details", body = ListingDto),
        (status = 404, description = "Listing not found", body = ErrorResponse),
    )
)]
pub async fn get_listing(
    State(state): State<AppState>,
    Path(ticket_id): Path<u64>,
) -> Result<impl IntoResponse, GatewayError> {
    let listing = state.market.listing(ticket_id).await?;
    Ok(Json(ListingDto::from(listing)))
}

/// `POST /listings/:ticket_id/purchase` — Buy a listed ticket.
///
/// # Errors
///
/// Returns [`GatewayError`] for missing or sold listings, insufficient
/// payment, or insufficient buyer funds (402).
#[utoipa::path(
    post,
    path = "/api/v1/listings/{ticket_id}/purchase",
    tag = "Listings",
    summary = "Purchase a listed ticket",
    description = "Buys a resale listing. Payment defaults to the asking price when `value_eth` is omitted; the seller is credited and the ticket moves to the buyer atomically.",
    params(
        ("ticket_id" = u64, Path, description = "Token id the listing covers"),
    ),
    request_body = BuyListingRequest,
    responses(
        (status = 200, description = "Ticket purchased", body = ListingTxResponse),
        (status = 402, description = "Insufficient funds", body = ErrorResponse),
        (status = 404, description = "Listing not found", body = ErrorResponse),
        (status = 422, description = "Listing already sold or payment below price", body = ErrorResponse),
    )
)]
pub async fn buy_listing(
    State(state): State<AppState>,
    Path(ticket_id): Path<u64>,
    Json(req): Json<BuyListingRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let value = match req.value_eth.as_deref() {
        Some(eth) => Some(units::parse_ether(eth)?),
        None => None,
    };
    let receipt = state.market.buy_ticket(req.from, ticket_id, value).await?;
    let listing = state.market.listing(ticket_id).await?;

    Ok(Json(ListingTxResponse {
        listing: ListingDto::from(listing),
        receipt: receipt.into(),
    }))
}

/// Listing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/listings", post(create_listing))
        .route("/listings/{ticket_id}", get(get_listing))
        .route("/listings/{ticket_id}/purchase", post(buy_listing))
}

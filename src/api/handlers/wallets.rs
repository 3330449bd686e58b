//! Wallet handlers: account listing, balances, and owned tickets.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    BalanceResponse, OwnedTicketDto, OwnedTicketListResponse, WalletDto, WalletListResponse,
};
use crate::app_state::AppState;
use crate::chain::{Address, units};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /wallets` — All funded dev accounts.
#[utoipa::path(
    get,
    path = "/api/v1/wallets",
    tag = "Wallets",
    summary = "List accounts",
    description = "Returns every funded account with its balance, in creation order.",
    responses(
        (status = 200, description = "Account list", body = WalletListResponse),
    )
)]
pub async fn list_wallets(State(state): State<AppState>) -> impl IntoResponse {
    let accounts = state.market.accounts().await;
    let total = accounts.len() as u64;
    let data: Vec<WalletDto> = accounts
        .into_iter()
        .map(|(address, balance)| WalletDto::new(address, balance))
        .collect();
    Json(WalletListResponse { data, total })
}

/// `GET /wallets/:address/balance` — Account balance.
///
/// # Errors
///
/// Returns [`GatewayError::WalletNotConnected`] for unknown accounts.
#[utoipa::path(
    get,
    path = "/api/v1/wallets/{address}/balance",
    tag = "Wallets",
    summary = "Get wallet balance",
    description = "Returns the current balance of an account in wei and ether.",
    params(
        ("address" = String, Path, description = "Account address"),
    ),
    responses(
        (status = 200, description = "Current balance", body = BalanceResponse),
        (status = 401, description = "Unknown account", body = ErrorResponse),
    )
)]
pub async fn get_balance(
    State(state): State<AppState>,
    Path(address): Path<Address>,
) -> Result<impl IntoResponse, GatewayError> {
    let balance = state.market.balance(address).await?;
    Ok(Json(BalanceResponse {
        address,
        balance_wei: balance.to_string(),
        balance_eth: units::format_ether(balance),
    }))
}

/// `GET /wallets/:address/tickets` — Tickets owned by an account.
///
/// # Errors
///
/// Returns [`GatewayError::MetadataFetch`] when any metadata document is
/// unreachable or malformed; the list is never returned partially.
#[utoipa::path(
    get,
    path = "/api/v1/wallets/{address}/tickets",
    tag = "Wallets",
    summary = "List owned tickets",
    description = "Walks every event's ticket contract and returns the tokens the account owns, each joined with its metadata document.",
    params(
        ("address" = String, Path, description = "Account address"),
    ),
    responses(
        (status = 200, description = "Owned tickets", body = OwnedTicketListResponse),
        (status = 502, description = "Metadata document unreachable", body = ErrorResponse),
    )
)]
pub async fn owned_tickets(
    State(state): State<AppState>,
    Path(address): Path<Address>,
) -> Result<impl IntoResponse, GatewayError> {
    let tickets = state.market.owned_tickets(address).await?;
    let total = tickets.len() as u64;
    let data: Vec<OwnedTicketDto> = tickets.into_iter().map(OwnedTicketDto::from).collect();
    Ok(Json(OwnedTicketListResponse { data, total }))
}

/// Wallet routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/wallets", get(list_wallets))
        .route("/wallets/{address}/balance", get(get_balance))
        .route("/wallets/{address}/tickets", get(owned_tickets))
}

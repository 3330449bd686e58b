//! Event handlers: catalog, detail, creation, and minting.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CreateEventRequest, CreateEventResponse, EventDto, EventListResponse, MintTicketRequest,
    MintTicketResponse,
};
use crate::app_state::AppState;
use crate::chain::units;
use crate::error::{ErrorResponse, GatewayError};
use crate::service::CreateEventInput;

/// `GET /events` — Full event catalog in creation order.
///
/// # Errors
///
/// Returns [`GatewayError`] if any event read fails; the catalog is never
/// returned partially.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    summary = "List all events",
    description = "Returns every registered event in creation order. All event reads must succeed; a single failure fails the whole fetch.",
    responses(
        (status = 200, description = "Event catalog", body = EventListResponse),
        (status = 404, description = "An event read failed mid-fetch", body = ErrorResponse),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let events = state.market.catalog().await?;
    let total = events.len() as u64;
    let data: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();
    Ok(Json(EventListResponse { data, total }))
}

/// `GET /events/:id` — Single event detail.
///
/// # Errors
///
/// Returns [`GatewayError::EventNotFound`] for out-of-range ids.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = "Events",
    summary = "Get event details",
    description = "Returns the on-chain record of a single event.",
    params(
        ("id" = u64, Path, description = "Event id"),
    ),
    responses(
        (status = 200, description = "Event details", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, GatewayError> {
    let event = state.market.event(id).await?;
    Ok(Json(EventDto::from(event)))
}

/// `POST /events` — Register a new event.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] on missing fields or a bad
/// price string, or a wallet/transaction error.
#[utoipa::path(
    post,
    path = "/api/v1/events",
    tag = "Events",
    summary = "Create a new event",
    description = "Registers an event and deploys its ticket contract. Any referenced image must already be uploaded; success is reported only after the transaction confirms.",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = CreateEventResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unknown host account", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let ticket_price = units::parse_ether(&req.ticket_price_eth)?;

    let created = state
        .market
        .create_event(CreateEventInput {
            host: req.host,
            name: req.name,
            description: req.description,
            ticket_price,
            max_tickets: req.max_tickets,
            image_cid: req.image_cid,
            event_details: req.event_details,
        })
        .await?;

    let response = CreateEventResponse {
        event_id: created.event_id,
        ticket_nft_address: created.ticket_nft_address,
        receipt: created.receipt.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `POST /events/:id/tickets` — Mint a ticket for an event.
///
/// # Errors
///
/// Returns [`GatewayError`] for unknown events, unknown accounts, or a
/// sold-out event (422).
#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/tickets",
    tag = "Events",
    summary = "Mint a ticket",
    description = "Mints the next ticket for an event. The metadata locator suffix is derived from the contract's minted count. Reverts with 422 when the event is sold out.",
    params(
        ("id" = u64, Path, description = "Event id"),
    ),
    request_body = MintTicketRequest,
    responses(
        (status = 201, description = "Ticket minted", body = MintTicketResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 422, description = "Event sold out", body = ErrorResponse),
    )
)]
pub async fn mint_ticket(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<MintTicketRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let minted = state
        .market
        .mint_ticket(id, req.from, req.recipient, req.metadata_cid)
        .await?;

    let response = MintTicketResponse {
        event_id: id,
        token_id: minted.token_id,
        metadata_uri: minted.metadata_uri,
        receipt: minted.receipt.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", get(get_event))
        .route("/events/{id}/tickets", post(mint_ticket))
}

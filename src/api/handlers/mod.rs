//! REST endpoint handlers organized by resource.

pub mod content;
pub mod events;
pub mod listings;
pub mod system;
pub mod tickets;
pub mod wallets;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(events::routes())
        .merge(tickets::routes())
        .merge(listings::routes())
        .merge(wallets::routes())
        .merge(content::routes())
}

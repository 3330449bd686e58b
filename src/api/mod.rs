//! HTTP surface: DTOs, resource handlers, and router assembly.
//!
//! Resource endpoints (events, tickets, listings, wallets, content) are
//! versioned under `/api/v1`; the health check and the navigation section
//! catalog sit at the root.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Assembles the full gateway router.
pub fn build_router() -> Router<AppState> {
    let resources = handlers::routes();
    let system = handlers::system::routes();
    Router::new().nest("/api/v1", resources).merge(system)
}

//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::MarketService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Market service for all marketplace and ticket operations.
    pub market: Arc<MarketService>,
}

//! ticketplace-gateway server entry point.
//!
//! Starts the Axum HTTP server in front of the in-process chain node,
//! seeding a set of funded dev accounts at boot.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use ticketplace_gateway::api;
use ticketplace_gateway::app_state::AppState;
use ticketplace_gateway::chain::ChainNode;
use ticketplace_gateway::config::GatewayConfig;
use ticketplace_gateway::service::MarketService;
use ticketplace_gateway::storage::ContentStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting ticketplace-gateway");

    // Build chain layer
    let node = Arc::new(ChainNode::new());
    tracing::info!(marketplace = %node.marketplace_address(), "marketplace deployed");
    for _ in 0..config.dev_accounts {
        let address = node.create_account(config.dev_account_balance).await;
        tracing::info!(%address, balance = %config.dev_account_balance, "dev account funded");
    }

    // Build storage and service layers
    let content = Arc::new(ContentStore::new(&config.ipfs_gateway_host));
    let market = Arc::new(MarketService::new(node, content));

    // Build application state
    let app_state = AppState { market };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

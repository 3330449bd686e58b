//! System endpoints: health check and navigation sections.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::Section;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Navigation section info.
#[derive(Debug, Serialize, ToSchema)]
struct SectionInfo {
    #[schema(value_type = String)]
    section: Section,
    label: &'static str,
    path: &'static str,
}

/// `GET /config/sections` — List navigation sections.
#[utoipa::path(
    get,
    path = "/config/sections",
    tag = "System",
    summary = "List navigation sections",
    description = "Returns every navigation section the gateway serves, with its display label and API path.",
    responses(
        (status = 200, description = "Section catalog", body = Vec<SectionInfo>),
    )
)]
pub async fn sections_handler() -> impl IntoResponse {
    let sections: Vec<SectionInfo> = Section::ALL
        .iter()
        .map(|section| SectionInfo {
            section: *section,
            label: section.label(),
            path: section.api_path(),
        })
        .collect();
    (StatusCode::OK, Json(sections))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/sections", get(sections_handler))
}

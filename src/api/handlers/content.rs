//! Content upload handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::ContentUploadResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /content` — Upload raw bytes to the content store.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an empty body.
#[utoipa::path(
    post,
    path = "/api/v1/content",
    tag = "Content",
    summary = "Upload content",
    description = "Stores raw bytes (an event image or a metadata document) and returns the content identifier plus its gateway URL. Upload before creating the event that references it.",
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Content stored", body = ContentUploadResponse),
        (status = 400, description = "Empty body", body = ErrorResponse),
    )
)]
pub async fn upload_content(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    if body.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "request body is empty".to_string(),
        ));
    }
    let (cid, url) = state.market.upload_content(body.to_vec()).await;
    Ok((StatusCode::CREATED, Json(ContentUploadResponse { cid, url })))
}

/// Content routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/content", post(upload_content))
}

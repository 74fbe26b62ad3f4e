//! Handler for link metadata lookups.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, Uri},
};

use crate::api::dto::link::LinkResponse;
use crate::application::services::ShortLink;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a stored link as JSON.
///
/// # Endpoint
///
/// `GET /api/link/{code}`
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "code": "a1B2c3",
///   "url": "https://example.org",
///   "short_url": "https://s.example.com/s/a1B2c3",
///   "title": "T",
///   "description": "D",
///   "image": "",
///   "quote": "...",
///   "created_at": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 with a `not_found` error body if the code is unknown, 500 on
/// storage failure. The lookup runs before the short URL base is derived, so
/// an unknown code is a 404 whatever the request headers.
pub async fn link_metadata_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.resolve(&code).await?;
    let base_url = state.base_url_for(&headers, &uri)?;

    Ok(Json(ShortLink::new(link, &base_url).into()))
}

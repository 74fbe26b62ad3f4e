//! Handler for the JSON link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Uri},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link from a JSON body.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.org",
///   "title": "T",               // optional
///   "description": "D",         // optional
///   "image": "https://...",     // optional
///   "quote": "..."              // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "a1B2c3",
///   "short_url": "https://s.example.com/s/a1B2c3",
///   "url": "https://example.org"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not a JSON object of the shape above, the URL is
///   missing/invalid, or metadata fails validation
/// - 500 on storage failure
/// - 503 if no unique code could be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let base_url = state.base_url_for(&headers, &uri)?;
    let short_link = state
        .link_service
        .create_short_link(payload.into(), &base_url)
        .await?;

    Ok(Json(short_link.into()))
}

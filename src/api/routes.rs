//! API route configuration.

use crate::api::handlers::{link_metadata_handler, shorten_handler};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only JSON routes.
///
/// - `GET /link/{code}` - Link metadata
pub fn lookup_routes() -> Router<AppState> {
    Router::new().route("/link/{code}", get(link_metadata_handler))
}

/// Creation route without rate limiting.
///
/// - `POST /shorten` - Create a short link from JSON
pub fn create_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}

/// All API routes, mounted under `/api`. Creation is rate limited per peer IP.
pub fn api_routes() -> Router<AppState> {
    lookup_routes().merge(create_routes().layer(rate_limit::layer()))
}

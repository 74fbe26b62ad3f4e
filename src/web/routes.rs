//! Page route configuration.

use crate::api::middleware::rate_limit;
use crate::state::AppState;
use crate::web::handlers::{home_handler, preview_handler, shorten_form_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only pages.
///
/// - `GET /` - Creation form
/// - `GET /s/{code}` - Preview page with delayed redirect
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/s/{code}", get(preview_handler))
}

/// Form submission without rate limiting.
///
/// - `POST /shorten` - Create a short link from the form
pub fn form_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_form_handler))
}

/// All page routes. Form submission is rate limited per peer IP.
pub fn web_routes() -> Router<AppState> {
    page_routes().merge(form_routes().layer(rate_limit::layer()))
}

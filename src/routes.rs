//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                - Creation form
//! - `POST /shorten`         - Form submission (rate limited)
//! - `GET  /s/{code}`        - Preview page with delayed redirect
//! - `POST /api/shorten`     - JSON creation (rate limited)
//! - `GET  /api/link/{code}` - Link metadata as JSON
//! - `GET  /health`          - Storage health check
//! - `/static/*`             - Static assets
//!
//! Unknown paths get the HTML 404 page.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::error::not_found_page;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Directory served under `/static`, relative to the working directory.
pub const STATIC_DIR: &str = "static";

/// Builds the router with all routes, middleware and state applied.
///
/// The creation routes are rate limited by peer IP, so the router must be
/// served with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::web_routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(not_found_page)
        .with_state(state)
        .layer(tracing::layer())
}

/// [`router`] wrapped so that `/s/abc/` and `/s/abc` are the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

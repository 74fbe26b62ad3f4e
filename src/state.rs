//! Shared application state injected into every handler.

use axum::http::{HeaderMap, Uri};
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::error::AppError;
use crate::utils::base_url::resolve_base_url;

/// State cloned into each request.
///
/// Holds the only process-wide resource, the link store, behind
/// [`LinkService`]. It is built once at startup and passed explicitly.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Public base for short URLs (`BASE_URL`); derived per request when `None`.
    pub base_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, base_url: Option<String>) -> Self {
        Self {
            link_service,
            base_url: base_url.map(Arc::from),
        }
    }

    /// Returns the base URL to build short links on for this request.
    ///
    /// # Errors
    ///
    /// See [`resolve_base_url`].
    pub fn base_url_for(&self, headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
        resolve_base_url(self.base_url.as_deref(), headers, uri)
    }
}

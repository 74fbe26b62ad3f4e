//! HTML error pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Template for `templates/error.html`.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub reason: String,
    pub message: String,
}

/// [`AppError`] rendered as an HTML page with the matching status code.
///
/// Storage failures show a generic message; the detail is only logged.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let info = self.0.to_error_info();

        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message: info.message,
        };

        (status, page).into_response()
    }
}

/// Fallback for unknown paths.
pub async fn not_found_page() -> Response {
    PageError(AppError::not_found("Page not found", serde_json::json!({}))).into_response()
}

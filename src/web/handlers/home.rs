//! Creation form page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::web::form::ShortenForm;

/// Template for `templates/index.html`.
///
/// Also used to re-render the form with the submitted values and an error
/// message when a submission is rejected. Empty strings mean "not set".
#[derive(Template, WebTemplate, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub error: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub quote: String,
}

impl IndexTemplate {
    /// Form prefilled with `form`, showing `error` above it.
    pub fn with_error(form: ShortenForm, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            url: form.url,
            title: form.title.unwrap_or_default(),
            description: form.description.unwrap_or_default(),
            image: form.image.unwrap_or_default(),
            quote: form.quote.unwrap_or_default(),
        }
    }
}

/// Renders the creation form.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    IndexTemplate::default()
}

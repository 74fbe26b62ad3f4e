//! Form submission handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::PageError;
use crate::web::form::ShortenForm;
use crate::web::handlers::IndexTemplate;

/// Template for `templates/created.html`.
#[derive(Template, WebTemplate)]
#[template(path = "created.html")]
pub struct CreatedTemplate {
    pub code: String,
    pub short_url: String,
    pub url: String,
}

/// Creates a short link from the HTML form.
///
/// # Endpoint
///
/// `POST /shorten` (`application/x-www-form-urlencoded`)
///
/// # Responses
///
/// - **200 OK**: confirmation page with the short URL and code
/// - **400 Bad Request**: the form again, prefilled, with the validation
///   message; an unreadable body shows the empty form with an error
/// - **500 / 503**: error page on storage failure or exhausted code attempts
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Response, PageError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => return Ok(rejected(ShortenForm::default(), rejection.into())),
    };

    if let Err(errors) = form.validate() {
        return Ok(rejected(form, AppError::from(errors)));
    }

    let base_url = state.base_url_for(&headers, &uri)?;

    match state
        .link_service
        .create_short_link(form.clone().into(), &base_url)
        .await
    {
        Ok(short_link) => Ok(CreatedTemplate {
            code: short_link.link.code,
            short_url: short_link.short_url,
            url: short_link.link.url,
        }
        .into_response()),
        Err(e @ AppError::Validation { .. }) => Ok(rejected(form, e)),
        Err(e) => Err(PageError(e)),
    }
}

fn rejected(form: ShortenForm, error: AppError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        IndexTemplate::with_error(form, error.to_string()),
    )
        .into_response()
}

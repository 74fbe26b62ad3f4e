//! Form body submitted by the creation page.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::application::services::LinkSubmission;

/// `application/x-www-form-urlencoded` body of `POST /shorten`.
///
/// Browsers send every input, so empty optional fields arrive as `""` and
/// are mapped to `None`.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: String,

    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,

    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(
        custom(
            function = "crate::utils::url_validator::validate_image_url",
            message = "Image must be an HTTP or HTTPS URL"
        ),
        length(max = 2048, message = "Image URL must be at most 2048 characters")
    )]
    pub image: Option<String>,

    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(length(max = 500, message = "Quote must be at most 500 characters"))]
    pub quote: Option<String>,
}

impl From<ShortenForm> for LinkSubmission {
    fn from(form: ShortenForm) -> Self {
        LinkSubmission {
            url: form.url,
            title: form.title,
            description: form.description,
            image: form.image,
            quote: form.quote,
        }
    }
}

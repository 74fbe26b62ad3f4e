//! DTOs for the JSON link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{LinkSubmission, ShortLink};

/// Request to shorten a URL.
///
/// `url` is optional at the serde level so that an absent or `null` URL is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten (must be absolute HTTP/HTTPS).
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: Option<String>,

    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Preview image shown on the link page.
    #[validate(
        custom(
            function = "crate::utils::url_validator::validate_image_url",
            message = "Image must be an HTTP or HTTPS URL"
        ),
        length(max = 2048, message = "Image URL must be at most 2048 characters")
    )]
    pub image: Option<String>,

    #[validate(length(max = 500, message = "Quote must be at most 500 characters"))]
    pub quote: Option<String>,
}

impl From<ShortenRequest> for LinkSubmission {
    fn from(request: ShortenRequest) -> Self {
        LinkSubmission {
            url: request.url.unwrap_or_default(),
            title: request.title,
            description: request.description,
            image: request.image,
            quote: request.quote,
        }
    }
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub url: String,
}

impl From<ShortLink> for ShortenResponse {
    fn from(short_link: ShortLink) -> Self {
        ShortenResponse {
            code: short_link.link.code,
            short_url: short_link.short_url,
            url: short_link.link.url,
        }
    }
}

//! Target URL validation.
//!
//! A target must be a well-formed absolute web URI: it parses with the `url`
//! crate, uses the `http` or `https` scheme, and names a host. The accepted
//! string is stored as submitted (only surrounding whitespace is removed), so
//! a resolved link always returns exactly what the user entered.

use url::Url;
use validator::ValidationError;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedScheme,

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates a submitted target URL and returns the value to store.
///
/// # Errors
///
/// - [`UrlValidationError::Missing`] for empty or whitespace-only input
/// - [`UrlValidationError::InvalidFormat`] when the input does not parse as an absolute URL
/// - [`UrlValidationError::UnsupportedScheme`] for anything but `http`/`https`
///   (rejects `javascript:`, `data:`, `file:`, ...)
/// - [`UrlValidationError::MissingHost`] when no host is present
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_target_url(" https://example.org ").unwrap(), "https://example.org");
/// assert!(validate_target_url("not-a-url").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedScheme),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlValidationError::MissingHost),
    }

    Ok(trimmed.to_string())
}

/// `validator` rule for preview image URLs.
///
/// Images are embedded in `<img src>` and `og:image`, so they follow the same
/// http/https rule as targets.
pub fn validate_image_url(value: &str) -> Result<(), ValidationError> {
    validate_target_url(value)
        .map(|_| ())
        .map_err(|e| ValidationError::new("image_url").with_message(e.to_string().into()))
}

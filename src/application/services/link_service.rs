//! Link creation and lookup service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::base_url::short_url;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_target_url;
use serde_json::json;
use tracing::{debug, error, info, warn};

/// Collision retries allowed before [`AppError::Exhausted`] is returned.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Seconds the preview page waits before navigating to the target.
pub const DEFAULT_REDIRECT_DELAY_SECS: u64 = 3;

/// User-supplied data for a new short link.
#[derive(Debug, Clone, Default)]
pub struct LinkSubmission {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub quote: Option<String>,
}

/// A stored link together with its public short URL.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub link: Link,
    pub short_url: String,
}

impl ShortLink {
    /// Pairs a stored link with its short URL under `base_url`.
    pub fn new(link: Link, base_url: &str) -> Self {
        let short_url = short_url(base_url, &link.code);
        Self { link, short_url }
    }

    pub fn code(&self) -> &str {
        &self.link.code
    }
}

/// Data needed to render the preview page for a link.
#[derive(Debug, Clone)]
pub struct LinkPreview {
    pub link: Link,
    pub redirect_delay_secs: u64,
}

/// Service for creating and resolving short links.
///
/// The store is injected, so the same service runs against PostgreSQL, the
/// in-memory store, or a mock.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    generator: CodeGenerator,
    max_attempts: usize,
    redirect_delay_secs: u64,
}

impl LinkService {
    /// Creates a service with the default generator, retry cap and redirect delay.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            repository,
            generator: CodeGenerator::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            redirect_delay_secs: DEFAULT_REDIRECT_DELAY_SECS,
        }
    }

    pub fn with_generator(mut self, generator: CodeGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Sets the collision retry cap. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_redirect_delay(mut self, seconds: u64) -> Self {
        self.redirect_delay_secs = seconds;
        self
    }

    pub fn repository(&self) -> &Arc<dyn LinkRepository> {
        &self.repository
    }

    /// Creates a short link.
    ///
    /// # Algorithm
    ///
    /// 1. Validate the target URL (absolute `http`/`https` with a host)
    /// 2. Generate a candidate code and insert it with the metadata
    /// 3. On a code conflict reported by the store, discard the candidate and
    ///    try a fresh one, up to `max_attempts` inserts in total
    ///
    /// Blank metadata is stored as empty strings, except the quote which falls
    /// back to [`crate::domain::entities::DEFAULT_QUOTE`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing or malformed, or
    /// the image is not an `http`/`https` URL. Nothing is persisted.
    ///
    /// Returns [`AppError::Exhausted`] if every attempt collided.
    ///
    /// Returns [`AppError::Storage`] on any other storage failure (not retried).
    pub async fn create_short_link(
        &self,
        submission: LinkSubmission,
        base_url: &str,
    ) -> Result<ShortLink, AppError> {
        let url = validate_target_url(&submission.url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "field": "url" }))
        })?;

        let title = clean(submission.title);
        let description = clean(submission.description);
        let image = clean(submission.image);
        if !image.is_empty() && validate_target_url(&image).is_err() {
            return Err(AppError::bad_request(
                "Image must be an HTTP or HTTPS URL",
                json!({ "field": "image" }),
            ));
        }
        let quote = NewLink::quote_or_default(submission.quote.as_deref());

        for attempt in 1..=self.max_attempts {
            let new_link = NewLink {
                code: self.generator.generate(),
                url: url.clone(),
                title: title.clone(),
                description: description.clone(),
                image: image.clone(),
                quote: quote.clone(),
            };

            match self.repository.create(new_link).await {
                Ok(link) => {
                    info!(code = %link.code, attempt, "short link created");
                    return Ok(ShortLink::new(link, base_url));
                }
                Err(AppError::Conflict { .. }) => {
                    metrics::counter!("links_code_collisions_total").increment(1);
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "short code collision, retrying with a new code"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            max_attempts = self.max_attempts,
            code_length = self.generator.length(),
            "giving up on short code generation"
        );

        Err(AppError::exhausted(
            "Could not allocate a unique short code, please try again later",
            json!({
                "attempts": self.max_attempts,
                "code_length": self.generator.length(),
            }),
        ))
    }

    /// Looks up a link by exact code match.
    ///
    /// The code is not checked against the generator alphabet; any string is a
    /// valid lookup key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Storage`] on storage failures.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Resolves a link for the human-facing preview page.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn resolve_for_display(&self, code: &str) -> Result<LinkPreview, AppError> {
        let link = self.resolve(code).await?;
        debug!(code = %link.code, "rendering preview");

        Ok(LinkPreview {
            link,
            redirect_delay_secs: self.redirect_delay_secs,
        })
    }

    /// Resolves a link for programmatic consumers, including its short URL.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn get_metadata(&self, code: &str, base_url: &str) -> Result<ShortLink, AppError> {
        let link = self.resolve(code).await?;

        Ok(ShortLink::new(link, base_url))
    }

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage failures.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Trims optional metadata, mapping `None` to an empty string.
fn clean(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

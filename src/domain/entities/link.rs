//! Link entity representing a shortened URL and its preview metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Quote stored when the submitter leaves the quote field blank.
pub const DEFAULT_QUOTE: &str = "The shortest distance between two points is a good link.";

/// A stored short link.
///
/// Records are write-once: nothing in the crate mutates a `Link` after the
/// store has returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub quote: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Returns true if the submitter supplied a preview image.
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Title shown on the preview page, falling back to the target URL.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// Input data for inserting a new link.
///
/// Built by [`crate::application::services::LinkService`] after validation, so
/// every field already holds its final stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub quote: String,
}

impl NewLink {
    /// Returns the quote to persist, substituting [`DEFAULT_QUOTE`] for blank input.
    pub fn quote_or_default(quote: Option<&str>) -> String {
        match quote.map(str::trim) {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => DEFAULT_QUOTE.to_string(),
        }
    }
}

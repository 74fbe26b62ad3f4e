//! DTO for link metadata lookups.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::ShortLink;

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub short_url: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub quote: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkResponse {
    fn from(short_link: ShortLink) -> Self {
        let link = short_link.link;
        LinkResponse {
            id: link.id,
            code: link.code,
            url: link.url,
            short_url: short_link.short_url,
            title: link.title,
            description: link.description,
            image: link.image,
            quote: link.quote,
            created_at: link.created_at,
        }
    }
}

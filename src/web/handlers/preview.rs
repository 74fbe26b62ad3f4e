//! Preview page shown before redirecting to the target.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, Uri},
    response::IntoResponse,
};

use crate::application::services::LinkPreview;
use crate::state::AppState;
use crate::utils::base_url::short_url;
use crate::web::PageError;

/// Template for `templates/preview.html`.
///
/// `page_url` is empty when no base URL could be determined; the `og:url`
/// tag is then omitted.
#[derive(Template, WebTemplate)]
#[template(path = "preview.html")]
pub struct PreviewTemplate {
    pub code: String,
    pub url: String,
    pub page_url: String,
    pub title: String,
    pub heading: String,
    pub description: String,
    pub image: String,
    pub has_image: bool,
    pub quote: String,
    pub delay_secs: u64,
    pub delay_ms: u64,
}

impl PreviewTemplate {
    pub fn new(preview: LinkPreview, page_url: String) -> Self {
        let link = preview.link;
        let heading = link.display_title().to_string();
        let has_image = link.has_image();

        Self {
            code: link.code,
            url: link.url,
            page_url,
            title: link.title,
            heading,
            description: link.description,
            image: link.image,
            has_image,
            quote: link.quote,
            delay_secs: preview.redirect_delay_secs,
            delay_ms: preview.redirect_delay_secs.saturating_mul(1000),
        }
    }
}

/// Renders the preview page for a short link.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// The page shows the stored metadata and an "open now" link, then navigates
/// to the target after the configured delay unless the visitor already left
/// or clicked through. Without JavaScript a `<meta http-equiv="refresh">`
/// does the same.
///
/// # Errors
///
/// - 404 page if the code is unknown
/// - 500 page on storage failure
pub async fn preview_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<impl IntoResponse, PageError> {
    let preview = state.link_service.resolve_for_display(&code).await?;
    let page_url = state
        .base_url_for(&headers, &uri)
        .map(|base| short_url(&base, &preview.link.code))
        .unwrap_or_default();

    Ok(PreviewTemplate::new(preview, page_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DEFAULT_QUOTE, Link};
    use chrono::Utc;

    fn preview(title: &str, image: &str) -> LinkPreview {
        LinkPreview {
            link: Link {
                id: 1,
                code: "a1B2c3".to_string(),
                url: "https://example.org/page?a=1&b=2".to_string(),
                title: title.to_string(),
                description: "D".to_string(),
                image: image.to_string(),
                quote: DEFAULT_QUOTE.to_string(),
                created_at: Utc::now(),
            },
            redirect_delay_secs: 3,
        }
    }

    #[test]
    fn test_preview_renders_metadata_and_redirect() {
        let page = PreviewTemplate::new(
            preview("T", "https://example.org/i.png"),
            "https://s.example.com/s/a1B2c3".to_string(),
        );
        let html = page.render().unwrap();

        assert!(html.contains(r#"property="og:title" content="T""#));
        assert!(html.contains(r#"property="og:image" content="https://example.org/i.png""#));
        assert!(html.contains(r#"id="open-now""#));
        assert!(html.contains("3000"));
        assert!(html.contains(r#"http-equiv="refresh""#));
        assert!(html.contains(DEFAULT_QUOTE));
    }

    #[test]
    fn test_preview_without_title_or_image() {
        let page = PreviewTemplate::new(preview("", ""), String::new());
        let html = page.render().unwrap();

        assert!(!html.contains("og:image"));
        assert!(!html.contains("og:url"));
        assert_eq!(page.heading, "https://example.org/page?a=1&b=2");
    }

    #[test]
    fn test_delay_in_milliseconds() {
        let mut p = preview("T", "");
        p.redirect_delay_secs = 0;
        let page = PreviewTemplate::new(p, String::new());

        assert_eq!(page.delay_ms, 0);
        assert_eq!(page.delay_secs, 0);
    }
}

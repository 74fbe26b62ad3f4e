//! Public base URL resolution and short URL construction.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

/// Header set by reverse proxies to report the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the fully-qualified short URL for `code`.
///
/// ```ignore
/// assert_eq!(short_url("https://s.example.com/", "abc123"), "https://s.example.com/s/abc123");
/// ```
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}/s/{}", base.trim_end_matches('/'), code)
}

/// Returns the base URL short links are built on.
///
/// Uses `configured` (`BASE_URL`) when present, otherwise derives
/// `scheme://host[:port]` from the request. The authority comes from the
/// `Host` header, or from the request URI when `Host` is absent (HTTP/2
/// carries it in `:authority`). The scheme comes from `X-Forwarded-Proto`,
/// then the URI scheme, default `http`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base is configured and the request
/// names no host, or the host is not UTF-8 or contains characters that cannot
/// appear in a host.
pub fn resolve_base_url(
    configured: Option<&str>,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<String, AppError> {
    if let Some(base) = configured {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
            .trim(),
        None => uri
            .authority()
            .map(|authority| authority.as_str())
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?,
    };

    let valid_host = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '[' | ']'));
    if !valid_host {
        return Err(AppError::bad_request(
            "Invalid Host header",
            json!({ "host": host }),
        ));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .or_else(|| uri.scheme_str())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{}://{}", scheme, host))
}

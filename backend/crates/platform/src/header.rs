//! Request header helpers

use axum::http::HeaderMap;

/// Extract a non-empty header value as an owned string
///
/// Values that are not visible ASCII or are blank after trimming
/// are treated as absent.
pub fn extract_header(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?.to_str().ok()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

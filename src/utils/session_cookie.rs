//! Session token extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Extracts the session token from the `Cookie` header, if present.
///
/// Handles multiple cookies by splitting on semicolons and taking the first
/// `session_token` pair; other cookies are ignored. An empty value counts as
/// absent.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::COOKIE, "theme=dark; session_token=abc".parse().unwrap());
///
/// assert_eq!(extract_session_token(&headers), Some("abc".to_string()));
/// ```
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) if !value.is_empty() => {
                        Some(value.to_string())
                    }
                    _ => None,
                }
            })
        })
}

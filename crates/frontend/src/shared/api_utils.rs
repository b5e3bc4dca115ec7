//! API utilities for the remote data source
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location and the
/// configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Path of an entity endpoint, with the optional record id percent-encoded
///
/// # Example
/// ```ignore
/// assert_eq!(entity_path("port", Some("a/b")), "/api/port/a%2Fb");
/// ```
pub fn entity_path(entity: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/api/{}/{}", entity, urlencoding::encode(id)),
        None => format!("/api/{}", entity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_path() {
        assert_eq!(entity_path("partner", None), "/api/partner");
        assert_eq!(entity_path("partner", Some("12")), "/api/partner/12");
        assert_eq!(entity_path("port", Some("a b/c")), "/api/port/a%20b%2Fc");
    }
}

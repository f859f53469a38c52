//! API utilities for frontend-backend communication

use serde::Deserialize;

/// Get the base URL for API requests
///
/// Constructed from the current window location; the indexing backend
/// listens on port 8000 next to wherever the frontend is served from.
/// Returns an empty string if no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
}

/// Human-readable message for a failed response.
///
/// Prefers the backend's `detail` field; anything else (missing body,
/// non-JSON body, empty detail) falls back to the caller's message.
pub fn error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            detail: Some(detail),
        }) if !detail.trim().is_empty() => detail,
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_backend_detail() {
        let body = r#"{"detail": "Vault path not found: /tmp/nope"}"#;
        assert_eq!(
            error_message(body, "Failed to load vault preview"),
            "Vault path not found: /tmp/nope"
        );
    }

    #[test]
    fn error_message_falls_back_without_detail() {
        assert_eq!(
            error_message("{}", "Failed to load vault preview"),
            "Failed to load vault preview"
        );
        assert_eq!(
            error_message("<html>502</html>", "HTTP 502"),
            "HTTP 502"
        );
        assert_eq!(
            error_message(r#"{"detail": "   "}"#, "HTTP 500"),
            "HTTP 500"
        );
    }
}

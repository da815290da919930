//! Error taxonomy for the REST clients.
//!
//! Non-2xx responses become [`ApiError::Server`] carrying a user-visible
//! message; failures before a response arrives become
//! [`ApiError::Network`]. Nothing is retried automatically — pages show
//! the message and leave the next attempt to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a request to a backend service.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{0}")]
    Server(String),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Requests cannot be issued outside the browser.
    #[error("not available outside the browser")]
    Unsupported,
}

/// Extract a user-facing message from an error response body.
///
/// Backends reply with either `{"message": ...}` or `{"error": ...}`;
/// anything else falls back to the caller's generic text plus the status
/// code.
pub fn server_message(status: u16, body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("{fallback} ({status})"))
}

/// Map a failed bearer-authenticated request to actionable text.
///
/// `denied` is the 403 message, which varies by operation ("log out and
/// log in again" vs. "you may not have permission").
pub fn bearer_message(status: u16, body: &str, fallback: &str, denied: &str) -> String {
    match status {
        401 => "Not authenticated. Please log in.".to_owned(),
        403 => denied.to_owned(),
        _ => server_message(status, body, fallback),
    }
}

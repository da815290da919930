use super::*;

// =============================================================
// server_message
// =============================================================

#[test]
fn server_message_prefers_message_then_error() {
    let body = r#"{"message":"m1","error":"m2"}"#;
    assert_eq!(server_message(500, body, "Failed"), "m1");

    let body = r#"{"error":"m2"}"#;
    assert_eq!(server_message(500, body, "Failed"), "m2");
}

#[test]
fn server_message_falls_back_with_status() {
    assert_eq!(
        server_message(500, r#"{"detail":"x"}"#, "Failed to create post"),
        "Failed to create post (500)"
    );
}

#[test]
fn server_message_handles_non_json_body() {
    assert_eq!(
        server_message(502, "<html>bad gateway</html>", "Failed to fetch posts"),
        "Failed to fetch posts (502)"
    );
}

// =============================================================
// bearer_message
// =============================================================

#[test]
fn bearer_message_maps_401() {
    assert_eq!(
        bearer_message(401, "", "Failed", "denied"),
        "Not authenticated. Please log in."
    );
}

#[test]
fn bearer_message_maps_403_to_operation_text() {
    assert_eq!(
        bearer_message(403, "", "Failed", "Access denied. Please log out and log in again."),
        "Access denied. Please log out and log in again."
    );
}

#[test]
fn bearer_message_delegates_other_statuses() {
    assert_eq!(
        bearer_message(500, r#"{"message":"boom"}"#, "Failed", "denied"),
        "boom"
    );
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn api_error_display() {
    assert_eq!(ApiError::Server("no such post".to_owned()).to_string(), "no such post");
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
    assert_eq!(ApiError::Unsupported.to_string(), "not available outside the browser");
}

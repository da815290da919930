use base64::Engine as _;

use super::*;

fn payload_token(json: &str) -> String {
    let payload = URL_SAFE_NO_PAD.encode(json);
    format!("header.{payload}.signature")
}

// =============================================================
// Well-formed tokens
// =============================================================

#[test]
fn decodes_full_claims() {
    let user = decode("h.eyJ1c2VySWQiOjEsInN1YiI6ImFsaWNlIiwicm9sZXMiOlsiVVNFUiJdfQ.s")
        .expect("user");
    assert_eq!(user.id, Some(1));
    assert_eq!(user.username, "alice");
    assert_eq!(user.roles, vec!["USER".to_owned()]);
}

#[test]
fn missing_user_id_decodes_to_stale_identity() {
    let user = decode(&payload_token(r#"{"sub":"bob"}"#)).expect("user");
    assert_eq!(user.id, None);
    assert_eq!(user.username, "bob");
    assert!(user.roles.is_empty());
}

#[test]
fn roles_default_to_empty() {
    let user = decode(&payload_token(r#"{"userId":7,"sub":"carol"}"#)).expect("user");
    assert_eq!(user.id, Some(7));
    assert!(user.roles.is_empty());
}

#[test]
fn accepts_padded_standard_base64() {
    let payload = STANDARD.encode(r#"{"userId":3,"sub":"dave","roles":[]}"#);
    let user = decode(&format!("h.{payload}.s")).expect("user");
    assert_eq!(user.id, Some(3));
    assert_eq!(user.username, "dave");
}

// =============================================================
// Malformed tokens decode to None
// =============================================================

#[test]
fn rejects_wrong_segment_count() {
    assert_eq!(decode(""), None);
    assert_eq!(decode("one-segment"), None);
    assert_eq!(decode("two.segments"), None);
    assert_eq!(decode("f.o.u.r"), None);
}

#[test]
fn rejects_invalid_base64_payload() {
    assert_eq!(decode("h.!!!not-base64!!!.s"), None);
}

#[test]
fn rejects_non_json_payload() {
    assert_eq!(decode(&payload_token("not json")), None);
}

#[test]
fn rejects_non_object_payload() {
    assert_eq!(decode(&payload_token("42")), None);
}

#[test]
fn rejects_payload_without_subject() {
    assert_eq!(decode(&payload_token(r#"{"userId":1}"#)), None);
}

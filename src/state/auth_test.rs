use super::*;
use leptos::prelude::GetUntracked;

const ALICE_TOKEN: &str = "h.eyJ1c2VySWQiOjEsInN1YiI6ImFsaWNlIiwicm9sZXMiOlsiVVNFUiJdfQ.s";

// =============================================================
// Derivation from tokens
// =============================================================

#[test]
fn default_is_logged_out() {
    let state = AuthState::default();
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn from_token_none_is_logged_out() {
    assert_eq!(AuthState::from_token(None), AuthState::default());
}

#[test]
fn from_token_empty_is_logged_out() {
    assert_eq!(AuthState::from_token(Some("")), AuthState::default());
}

#[test]
fn from_token_valid_sets_identity() {
    let state = AuthState::from_token(Some(ALICE_TOKEN));
    assert!(state.authenticated);
    let user = state.user.expect("user");
    assert_eq!(user.id, Some(1));
    assert_eq!(user.username, "alice");
    assert_eq!(user.roles, vec!["USER".to_owned()]);
}

#[test]
fn from_token_undecodable_is_authenticated_without_identity() {
    let state = AuthState::from_token(Some("garbage"));
    assert!(state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn from_storage_without_browser_is_logged_out() {
    assert_eq!(AuthState::from_storage(), AuthState::default());
}

// =============================================================
// Stale identity
// =============================================================

#[test]
fn stale_identity_false_when_logged_out() {
    assert!(!AuthState::default().stale_identity());
}

#[test]
fn stale_identity_false_with_id_claim() {
    assert!(!AuthState::from_token(Some(ALICE_TOKEN)).stale_identity());
}

#[test]
fn stale_identity_true_without_id_claim() {
    // {"sub":"bob"}
    let state = AuthState::from_token(Some("h.eyJzdWIiOiJib2IifQ.s"));
    assert!(state.authenticated);
    assert!(state.stale_identity());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_then_logout_round_trip() {
    let auth = RwSignal::new(AuthState::default());

    login(auth, ALICE_TOKEN);
    let state = auth.get_untracked();
    assert!(state.authenticated);
    assert_eq!(state.user.and_then(|user| user.id), Some(1));

    logout(auth);
    assert_eq!(auth.get_untracked(), AuthState::default());

    // A second logout leaves the state identical.
    logout(auth);
    assert_eq!(auth.get_untracked(), AuthState::default());
}

use super::*;

// These run natively, where no browser storage exists: every operation
// must degrade to a no-op instead of panicking.

#[test]
fn get_returns_none_without_browser_storage() {
    assert_eq!(get(), None);
}

#[test]
fn save_is_a_noop_without_browser_storage() {
    save("h.p.s");
    assert_eq!(get(), None);
}

#[test]
fn remove_is_idempotent() {
    remove();
    remove();
    assert_eq!(get(), None);
}

#[test]
fn is_authenticated_false_without_token() {
    assert!(!is_authenticated());
}

//! Persistent bearer-token storage backed by `localStorage`.
//!
//! Holds a single opaque token under a well-known key. The value survives
//! page reloads and is cleared on logout. Outside a browser environment
//! (SSR, native tests) every operation is a safe no-op that reports
//! "no token" instead of touching storage.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "authToken";

/// Persist the token, overwriting any previous value.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Read the stored token, or `None` if nothing is stored.
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the stored token. Safe to call when nothing is stored.
pub fn remove() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// Whether a non-empty token is currently stored.
pub fn is_authenticated() -> bool {
    get().is_some_and(|token| !token.is_empty())
}

//! Reactive authentication state derived from the stored bearer token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Set};

use crate::net::types::User;
use crate::session::{claims, store};

/// Authentication state for the current page lifetime.
///
/// Provided as `RwSignal<AuthState>` context by the root component;
/// reading it outside that provider is a wiring bug and panics via
/// `expect_context`. The state is never mutated independently of the
/// token — [`login`] and [`logout`] are the only mutation paths, so
/// `authenticated` always mirrors token presence in storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub authenticated: bool,
    /// Identity decoded from the token payload. May be `None` even when
    /// authenticated, if the stored token cannot be decoded.
    pub user: Option<User>,
}

impl AuthState {
    /// Derive the state from whatever token is persisted in storage.
    pub fn from_storage() -> Self {
        Self::from_token(store::get().as_deref())
    }

    /// Derive the state from a token value. `None` or empty means
    /// logged out.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self {
                authenticated: true,
                user: claims::decode(token),
            },
            _ => Self::default(),
        }
    }

    /// True when the token decoded but predates the `userId` claim.
    /// Author-scoped requests cannot be made until the user logs in again.
    pub fn stale_identity(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.id.is_none())
    }
}

/// Persist the token and recompute the session identity from it.
/// Consumers of the context re-render with the new identity.
pub fn login(auth: RwSignal<AuthState>, token: &str) {
    store::save(token);
    auth.set(AuthState::from_token(Some(token)));
}

/// Clear the persisted token and reset to the logged-out state.
/// Idempotent: a second call leaves the state unchanged.
pub fn logout(auth: RwSignal<AuthState>) {
    store::remove();
    auth.set(AuthState::default());
}

//! Client-side session handling.
//!
//! A session is never stored directly: it is always re-derived from the
//! bearer token held by [`store`]. The [`claims`] decoder turns the token's
//! payload segment into a user identity for UI personalization only — the
//! backend services remain the sole authority on token validity.

pub mod claims;
pub mod store;

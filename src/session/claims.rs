//! Decoding of the bearer token's payload segment.
//!
//! Tokens are JWTs: three dot-separated base64 segments. Only the middle
//! (payload) segment is read here, and the signature is never checked —
//! the auth service is the sole authority on token validity. Decoding
//! exists purely so the UI can show who is logged in without a round trip.
//!
//! ERROR HANDLING
//! ==============
//! Any malformed input decodes to `None`, which callers treat as "not
//! authenticated". The failure modes (segment count, base64, JSON) are
//! logged with distinct warnings so a corrupt token can be told apart
//! from an absent one in the console.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde::Deserialize;

use crate::net::types::User;

/// Claims carried in the token's payload segment.
///
/// `userId` was added to the token format after launch; tokens minted
/// before that change decode to a user without an id, which pages must
/// treat as a stale session rather than an error.
#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(rename = "userId")]
    user_id: Option<i64>,
    /// The subject claim carries the username.
    sub: String,
    #[serde(default)]
    roles: Vec<String>,
}

/// Decode a token's payload into a [`User`].
///
/// Returns `None` when the token is malformed in any way: wrong segment
/// count, a payload that is not base64, or a payload that is not a JSON
/// claims object.
pub fn decode(token: &str) -> Option<User> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        leptos::logging::warn!(
            "stored token is not a three-segment JWT; treating as unauthenticated"
        );
        return None;
    };

    let Some(bytes) = decode_segment(payload) else {
        leptos::logging::warn!("token payload is not valid base64; treating as unauthenticated");
        return None;
    };

    let claims: TokenClaims = match serde_json::from_slice(&bytes) {
        Ok(claims) => claims,
        Err(err) => {
            leptos::logging::warn!("token payload is not a valid claims object: {err}");
            return None;
        }
    };

    if claims.user_id.is_none() {
        // Pre-`userId` token: it still decodes, but author-scoped requests
        // will fail until the user logs in again.
        leptos::logging::warn!("token has no userId claim; a re-login is required");
    }

    Some(User {
        id: claims.user_id,
        username: claims.sub,
        roles: claims.roles,
    })
}

/// JWT payloads are base64url without padding; tolerate padded standard
/// base64 from older token mints.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| STANDARD.decode(segment))
        .ok()
}

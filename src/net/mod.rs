//! REST clients for the external BlogHive services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`error::ApiError::Unsupported`], since these endpoints are only
//! meaningful in the browser.
//!
//! Base URLs are baked in at compile time; set `BLOGHIVE_API_URL` and
//! `BLOGHIVE_COMMENT_API_URL` at build time to override the localhost
//! defaults.

pub mod auth_api;
pub mod comment_api;
pub mod error;
pub mod post_api;
pub mod types;

/// Gateway base URL for the auth and post services.
pub const API_BASE_URL: &str = match option_env!("BLOGHIVE_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Base URL for the comment service, which is deployed separately.
pub const COMMENT_API_URL: &str = match option_env!("BLOGHIVE_COMMENT_API_URL") {
    Some(url) => url,
    None => "http://localhost:8081",
};

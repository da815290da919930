//! Client for the auth service.
//!
//! Error bodies here are plain text, not JSON, so the raw body becomes
//! the user-visible message when present.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, User};

#[cfg(feature = "hydrate")]
fn auth_url(path: &str) -> String {
    format!("{}/auth/{path}", super::API_BASE_URL)
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// [`ApiError::Server`] with the server's own text (or a generic message)
/// on a non-2xx response.
pub async fn login(credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_url("login"))
            .json(credentials)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server(failure_text(resp, "Login failed").await));
        }
        resp.json::<AuthResponse>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unsupported)
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// [`ApiError::Server`] with the server's own text (or a generic message)
/// on a non-2xx response.
pub async fn register(account: &RegisterRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_url("register"))
            .json(account)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server(
                failure_text(resp, "Registration failed").await,
            ));
        }
        resp.json::<User>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = account;
        Err(ApiError::Unsupported)
    }
}

#[cfg(feature = "hydrate")]
async fn failure_text(resp: gloo_net::http::Response, fallback: &str) -> String {
    let body = resp.text().await.unwrap_or_default();
    if body.is_empty() { fallback.to_owned() } else { body }
}

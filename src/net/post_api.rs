//! Client for the post service.
//!
//! Reads are public; writes and the author listing require a bearer
//! token.

#![allow(clippy::unused_async)]

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::{bearer_message, server_message};
use super::types::{CreatePostRequest, Post};

#[cfg(feature = "hydrate")]
fn posts_url(path: &str) -> String {
    if path.is_empty() {
        format!("{}/posts", super::API_BASE_URL)
    } else {
        format!("{}/posts/{path}", super::API_BASE_URL)
    }
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fetch every post via `GET /posts`.
///
/// # Errors
///
/// [`ApiError::Server`] on a non-2xx response.
pub async fn fetch_all() -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&posts_url(""))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server("Failed to fetch posts".to_owned()));
        }
        resp.json::<Vec<Post>>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unsupported)
    }
}

/// Fetch one post via `GET /posts/{id}`.
///
/// # Errors
///
/// [`ApiError::Server`] on a non-2xx response.
pub async fn fetch_by_id(id: i64) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&posts_url(&id.to_string()))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server("Failed to fetch post".to_owned()));
        }
        resp.json::<Post>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unsupported)
    }
}

/// Fetch an author's posts via `GET /posts/author/{id}` (bearer-authenticated).
///
/// # Errors
///
/// [`ApiError::Server`] with the backend's `message`/`error` text on a
/// non-2xx response.
pub async fn fetch_by_author(author_id: i64, token: &str) -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&posts_url(&format!("author/{author_id}")))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server(server_message(
                status,
                &body,
                "Failed to fetch user posts",
            )));
        }
        resp.json::<Vec<Post>>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (author_id, token);
        Err(ApiError::Unsupported)
    }
}

/// Publish a post via `POST /posts` (bearer-authenticated).
///
/// # Errors
///
/// [`ApiError::Server`] with actionable text; 401/403 map to re-login
/// prompts.
pub async fn create(post: &CreatePostRequest, token: &str) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&posts_url(""))
            .header("Authorization", &bearer(token))
            .json(post)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(write_failure(
                resp,
                "Failed to create post",
                "Access denied. Please log out and log in again.",
            )
            .await);
        }
        resp.json::<Post>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post, token);
        Err(ApiError::Unsupported)
    }
}

/// Rewrite a post via `PUT /posts/{id}` (bearer-authenticated).
///
/// # Errors
///
/// [`ApiError::Server`] with actionable text; 401/403 map to re-login or
/// permission prompts.
pub async fn update(id: i64, post: &CreatePostRequest, token: &str) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&posts_url(&id.to_string()))
            .header("Authorization", &bearer(token))
            .json(post)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(write_failure(
                resp,
                "Failed to update post",
                "Access denied. You may not have permission to edit this post.",
            )
            .await);
        }
        resp.json::<Post>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, post, token);
        Err(ApiError::Unsupported)
    }
}

/// Remove a post via `DELETE /posts/{id}` (bearer-authenticated).
///
/// # Errors
///
/// [`ApiError::Server`] on a non-2xx response.
pub async fn delete(id: i64, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&posts_url(&id.to_string()))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server("Failed to delete post".to_owned()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err(ApiError::Unsupported)
    }
}

#[cfg(feature = "hydrate")]
async fn write_failure(resp: gloo_net::http::Response, fallback: &str, denied: &str) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Server(bearer_message(status, &body, fallback, denied))
}

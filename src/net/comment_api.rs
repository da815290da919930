//! Client for the comment service.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{Comment, CreateCommentRequest};

#[cfg(feature = "hydrate")]
fn comments_url(path: &str) -> String {
    if path.is_empty() {
        format!("{}/comments", super::COMMENT_API_URL)
    } else {
        format!("{}/comments/{path}", super::COMMENT_API_URL)
    }
}

/// Fetch a post's comment thread via `GET /comments/post/{id}`.
///
/// # Errors
///
/// [`ApiError::Server`] on a non-2xx response.
pub async fn fetch_for_post(post_id: i64) -> Result<Vec<Comment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&comments_url(&format!("post/{post_id}")))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server("Failed to fetch comments".to_owned()));
        }
        resp.json::<Vec<Comment>>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err(ApiError::Unsupported)
    }
}

/// Publish a comment via `POST /comments` (bearer-authenticated).
///
/// # Errors
///
/// [`ApiError::Server`] on a non-2xx response.
pub async fn create(comment: &CreateCommentRequest, token: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&comments_url(""))
            .header("Authorization", &format!("Bearer {token}"))
            .json(comment)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server("Failed to create comment".to_owned()));
        }
        resp.json::<Comment>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (comment, token);
        Err(ApiError::Unsupported)
    }
}

/// Remove a comment via `DELETE /comments/{id}` (bearer-authenticated).
///
/// # Errors
///
/// [`ApiError::Server`] on a non-2xx response.
pub async fn delete(id: i64, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&comments_url(&id.to_string()))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server("Failed to delete comment".to_owned()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err(ApiError::Unsupported)
    }
}

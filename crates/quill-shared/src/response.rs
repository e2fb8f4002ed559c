//! Standardized API response envelope.
//!
//! Success bodies carry `success: true` plus either `post` or `posts`;
//! error bodies carry `success: false`, a `message` and, for storage
//! failures, an `error` description.

use serde::{Deserialize, Serialize};

/// Envelope around a single post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse<T> {
    pub success: bool,
    pub message: String,
    pub post: T,
}

impl<T> PostResponse<T> {
    pub fn ok(post: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            post,
        }
    }
}

/// Envelope around a list of posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse<T> {
    pub success: bool,
    pub posts: Vec<T>,
}

impl<T> PostListResponse<T> {
    pub fn ok(posts: Vec<T>) -> Self {
        Self {
            success: true,
            posts,
        }
    }
}

/// Error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,

    /// A human-readable summary of what failed.
    pub message: String,

    /// The underlying failure, present for storage errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Bare `{ "message": ... }` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

//! Data Transfer Objects - request bodies for the API.
//!
//! Unknown fields and wrongly typed values are rejected at deserialization,
//! so they surface as 400 responses rather than silently nulled fields.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts`.
///
/// Every field is optional at the wire level; presence of `title` and
/// `content` is checked by the domain layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Body of `PUT /api/posts/{id}`. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

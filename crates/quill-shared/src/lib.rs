//! # Quill Shared
//!
//! Wire types shared by the API server and its clients: request bodies and
//! the JSON envelope every response is wrapped in.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse, PostListResponse, PostResponse};

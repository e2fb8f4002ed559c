//! # Quill Core
//!
//! The domain layer of the Quill posts API.
//! This crate contains the post model, its write-time rules and the
//! record store port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};

//! Domain-level error types.

use thiserror::Error;

/// Domain errors - write-time rule failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    /// The identifier is not in the store's key format.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

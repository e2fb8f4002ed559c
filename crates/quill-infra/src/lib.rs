//! # Quill Infrastructure
//!
//! Concrete implementations of the record store port defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL record store via SeaORM
//!
//! The in-memory store is always available.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;

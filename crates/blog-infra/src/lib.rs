//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `mongo` (default) - MongoDB document store
//! - no features - in-memory only

pub mod database;

// Re-exports - In-Memory
pub use database::InMemoryPostRepository;

// Re-exports - MongoDB
#[cfg(feature = "mongo")]
pub use database::{MongoConfig, MongoPostRepository};

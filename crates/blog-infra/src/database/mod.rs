//! Post repository implementations.

mod memory;

#[cfg(feature = "mongo")]
mod mongo;

pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongo")]
pub use mongo::{MongoConfig, MongoPostRepository};

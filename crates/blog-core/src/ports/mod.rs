//! Ports - trait definitions implemented by the infrastructure layer.

mod repository;

pub use repository::PostRepository;

use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostPatch};
use crate::error::RepoError;

/// Post repository port.
///
/// Lookups by id return `Ok(None)` both when no post matches and when the id
/// is malformed for the backing store - a malformed id cannot name a stored
/// document, so it resolves to not-found rather than a failure.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts ordered by `created_at` descending. Unbounded.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Persist a new post with a store-assigned id and fresh timestamps.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Merge-patch an existing post, refreshing `updated_at`. Returns the
    /// updated post, or `None` if the id does not resolve.
    async fn update(&self, id: &str, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Remove a post. Returns the deleted post, or `None` if the id does not
    /// resolve.
    async fn delete(&self, id: &str) -> Result<Option<Post>, RepoError>;
}

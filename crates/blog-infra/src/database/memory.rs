//! In-memory post repository - used as fallback when MongoDB is not
//! configured, and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Post, PostDraft, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// In-memory store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(id).cloned())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let post = Post::new(Uuid::new_v4().to_string(), draft);
        let mut store = self.store.write().await;
        store.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn update(&self, id: &str, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        match store.get_mut(id) {
            Some(post) => {
                post.apply(patch);
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.remove(id))
    }
}

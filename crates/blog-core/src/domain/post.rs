use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Hard input boundaries. The storage layer would accept anything; these are
/// enforced here so every entry point shares the same rules.
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_AUTHOR_LEN: usize = 100;
pub const MAX_CONTENT_LEN: usize = 50_000;

/// Post entity - a single blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post. Both timestamps start at the same instant; the id
    /// comes from the store.
    pub fn new(id: String, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a merge-patch: fields absent from the patch stay unchanged.
    /// `author` and `created_at` are immutable; `updated_at` is refreshed.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}

/// Fields supplied by the client when creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_title(&self.title)?;
        validate_author(&self.author)?;
        validate_content(&self.content)?;
        Ok(())
    }
}

/// Partial update for a post. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(content) = &self.content {
            validate_content(content)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_author(author: &str) -> Result<(), DomainError> {
    if author.trim().is_empty() {
        return Err(DomainError::Validation("Author must not be empty".into()));
    }
    if author.chars().count() > MAX_AUTHOR_LEN {
        return Err(DomainError::Validation(format!(
            "Author must be at most {MAX_AUTHOR_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(DomainError::Validation(format!(
            "Content must be at most {MAX_CONTENT_LEN} characters"
        )));
    }
    Ok(())
}

//! MongoDB post repository.
//!
//! One `posts` collection; documents keep the Mongo conventions (`_id`
//! ObjectId, camelCase timestamp keys) while the domain sees plain `Post`
//! values with opaque string ids.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{DateTime as BsonDateTime, doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use blog_core::domain::{Post, PostDraft, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

const COLLECTION: &str = "posts";

/// Configuration for the MongoDB connection.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

/// Stored document shape.
#[derive(Debug, Serialize, Deserialize)]
struct PostDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    content: String,
    author: String,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
    #[serde(rename = "updatedAt")]
    updated_at: BsonDateTime,
}

impl From<PostDocument> for Post {
    fn from(doc: PostDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            content: doc.content,
            author: doc.author,
            created_at: to_chrono(doc.created_at),
            updated_at: to_chrono(doc.updated_at),
        }
    }
}

// BSON datetimes carry millisecond precision; conversions go through the
// shared millisecond representation.
fn to_bson(dt: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(dt.timestamp_millis())
}

fn to_chrono(dt: BsonDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

/// MongoDB-backed post repository.
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    /// Connect to the configured deployment and verify it is reachable.
    pub async fn connect(config: &MongoConfig) -> Result<Self, RepoError> {
        tracing::info!("Connecting to MongoDB...");

        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let database = client.database(&config.database);

        // Client construction is lazy; ping so a bad URI fails at startup.
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(database = %config.database, "MongoDB connected");

        Ok(Self {
            collection: database.collection(COLLECTION),
        })
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let docs: Vec<PostDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let doc = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(doc.map(Into::into))
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let oid = ObjectId::new();
        let post = Post::new(oid.to_hex(), draft);
        let doc = PostDocument {
            id: oid,
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: to_bson(post.created_at),
            updated_at: to_bson(post.updated_at),
        };

        self.collection
            .insert_one(&doc)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        // Return the stored form so timestamps match BSON precision.
        Ok(doc.into())
    }

    async fn update(&self, id: &str, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut set = doc! { "updatedAt": to_bson(Utc::now()) };
        if let Some(title) = patch.title {
            set.insert("title", title);
        }
        if let Some(content) = patch.content {
            set.insert("content", content);
        }

        let doc = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(doc.map(Into::into))
    }

    async fn delete(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let doc = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(doc.map(Into::into))
    }
}

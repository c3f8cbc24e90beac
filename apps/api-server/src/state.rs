//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    ///
    /// Connects to MongoDB when a URI is configured; otherwise (or when the
    /// connection fails) falls back to the in-memory repository so the
    /// server still comes up.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "mongo")]
        let posts: Arc<dyn PostRepository> = {
            use blog_infra::{MongoConfig, MongoPostRepository};

            if let Some(uri) = &config.mongo_uri {
                let mongo_config = MongoConfig {
                    uri: uri.clone(),
                    database: config.mongo_db.clone(),
                };
                match MongoPostRepository::connect(&mongo_config).await {
                    Ok(repo) => Arc::new(repo),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to MongoDB: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostRepository::new())
                    }
                }
            } else {
                tracing::warn!("MONGODB_URI not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "mongo"))]
        let posts: Arc<dyn PostRepository> = {
            let _ = config;
            tracing::info!("Running without mongo feature - using in-memory repository");
            Arc::new(InMemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Self { posts }
    }

    /// State backed by a caller-supplied repository. Used by tests.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

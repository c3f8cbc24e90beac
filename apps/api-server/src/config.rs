//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// MongoDB connection string. When absent the server runs on the
    /// in-memory repository.
    pub mongo_uri: Option<String>,
    pub mongo_db: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            mongo_uri: env::var("MONGODB_URI").ok(),
            mongo_db: env::var("MONGODB_DB").unwrap_or_else(|_| "blog".to_string()),
        }
    }
}

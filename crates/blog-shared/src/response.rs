//! Flat `{message}` response bodies.
//!
//! The API reports not-found, validation failures, server errors, and the
//! delete confirmation all through this one shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

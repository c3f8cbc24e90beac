//! Error handling at the handler boundary.
//!
//! Responses carry only a fixed human-readable message; the underlying
//! repository error is logged server-side and never sent to the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use blog_core::error::{DomainError, RepoError};
use blog_shared::MessageResponse;

/// Application-level error type that converts to `{message}` responses.
#[derive(Debug)]
pub enum AppError {
    /// The looked-up id does not resolve to an existing post.
    NotFound,
    /// Input failed the validation boundary.
    BadRequest(String),
    /// Unexpected failure; carries the fixed per-operation message.
    Internal(&'static str),
}

impl AppError {
    /// Classify a repository failure: log the raw error, respond with the
    /// operation's fixed message.
    pub fn internal(message: &'static str, source: RepoError) -> Self {
        tracing::error!(error = %source, "{message}");
        AppError::Internal(message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Post not found"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::NotFound => "Post not found".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Internal(msg) => (*msg).to_string(),
        };

        HttpResponse::build(self.status_code()).json(MessageResponse::new(message))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

//! Thin HTTP client wrapper around the Blog API.
//!
//! The base URL is injected at construction; there is no module-level
//! endpoint constant.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use blog_shared::{CreatePostRequest, MessageResponse, PostResponse, UpdatePostRequest};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Post not found")]
    NotFound,

    /// The server rejected the request; carries the `{message}` it returned.
    #[error("{0}")]
    Server(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct BlogApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl BlogApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }

    pub async fn list(&self) -> Result<Vec<PostResponse>, ApiError> {
        let resp = self.http.get(self.posts_url()).send().await?;
        decode(resp).await
    }

    pub async fn get(&self, id: &str) -> Result<PostResponse, ApiError> {
        let resp = self
            .http
            .get(format!("{}/{id}", self.posts_url()))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn create(&self, req: &CreatePostRequest) -> Result<PostResponse, ApiError> {
        let resp = self.http.post(self.posts_url()).json(req).send().await?;
        decode(resp).await
    }

    pub async fn update(&self, id: &str, req: &UpdatePostRequest) -> Result<PostResponse, ApiError> {
        let resp = self
            .http
            .put(format!("{}/{id}", self.posts_url()))
            .json(req)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(format!("{}/{id}", self.posts_url()))
            .send()
            .await?;
        decode::<MessageResponse>(resp).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }

    let message = match resp.json::<MessageResponse>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    Err(ApiError::Server(message))
}

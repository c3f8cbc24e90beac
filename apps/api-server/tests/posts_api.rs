//! End-to-end route tests against the in-memory repository.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use api_server::handlers::configure_routes;
use api_server::state::AppState;
use blog_core::domain::{Post, PostDraft, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

fn in_memory_state() -> AppState {
    AppState::with_repository(Arc::new(InMemoryPostRepository::new()))
}

/// Repository whose every operation fails, for the 500 paths.
struct FailingPostRepository;

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Connection("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Query("cursor timeout".to_string()))
    }

    async fn create(&self, _draft: PostDraft) -> Result<Post, RepoError> {
        Err(RepoError::Query("write failed".to_string()))
    }

    async fn update(&self, _id: &str, _patch: PostPatch) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Query("write failed".to_string()))
    }

    async fn delete(&self, _id: &str) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Query("write failed".to_string()))
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

fn post_body(n: u32) -> Value {
    json!({
        "title": format!("Post {n}"),
        "content": format!("Content {n}"),
        "author": format!("Author {n}"),
    })
}

#[actix_web::test]
async fn welcome_banner() {
    let app = init_app!(in_memory_state());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Welcome to Blog API");
}

#[actix_web::test]
async fn create_returns_201_with_generated_fields() {
    let app = init_app!(in_memory_state());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(post_body(1))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Post 1");
    assert_eq!(body["content"], "Content 1");
    assert_eq!(body["author"], "Author 1");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["createdAt"].as_str().is_some());
}

#[actix_web::test]
async fn create_with_empty_title_returns_400() {
    let app = init_app!(in_memory_state());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({"title": "  ", "content": "Content", "author": "Author"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Title must not be empty");
}

#[actix_web::test]
async fn list_returns_posts_newest_first() {
    let app = init_app!(in_memory_state());

    for n in 1..=3 {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body(n))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let posts = body.as_array().expect("array of posts");
    assert_eq!(posts.len(), 3);
    for pair in posts.windows(2) {
        let newer = pair[0]["createdAt"].as_str().unwrap();
        let older = pair[1]["createdAt"].as_str().unwrap();
        assert!(newer >= older);
    }
}

#[actix_web::test]
async fn get_unknown_id_returns_404() {
    let app = init_app!(in_memory_state());

    let req = test::TestRequest::get()
        .uri("/api/posts/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post not found");
}

#[actix_web::test]
async fn create_then_get_round_trips() {
    let app = init_app!(in_memory_state());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(post_body(1))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", created["id"].as_str().unwrap()))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn partial_update_changes_only_title() {
    let app = init_app!(in_memory_state());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(post_body(1))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{id}"))
        .set_json(json!({"title": "Updated Title"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], "Updated Title");
    assert_eq!(updated["content"], created["content"]);
    assert_eq!(updated["author"], created["author"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(updated["updatedAt"].as_str() >= created["updatedAt"].as_str());
}

#[actix_web::test]
async fn update_unknown_id_returns_404() {
    let app = init_app!(in_memory_state());

    let req = test::TestRequest::put()
        .uri("/api/posts/does-not-exist")
        .set_json(json!({"title": "Updated Title"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_twice_returns_200_then_404() {
    let app = init_app!(in_memory_state());

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(post_body(1))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post deleted successfully");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post not found");
}

#[actix_web::test]
async fn repository_failure_maps_to_500_with_fixed_message() {
    let app = init_app!(AppState::with_repository(Arc::new(FailingPostRepository)));

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Error fetching posts");

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(post_body(1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Error creating post");
}

//! Post CRUD handlers.
//!
//! Each handler performs exactly one repository call and maps the result to
//! the wire contract: 200/201 on success, 404 `{message:"Post not found"}`
//! when the id does not resolve, 500 with a fixed per-operation message on
//! repository failure.

use actix_web::{HttpResponse, web};

use blog_core::domain::{PostDraft, PostPatch};
use blog_shared::{CreatePostRequest, MessageResponse, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list_all()
        .await
        .map_err(|e| AppError::internal("Error fetching posts", e))?;

    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::internal("Error fetching post", e))?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let draft = PostDraft::from(body.into_inner());
    draft.validate()?;

    let post = state
        .posts
        .create(draft)
        .await
        .map_err(|e| AppError::internal("Error creating post", e))?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = PostPatch::from(body.into_inner());
    patch.validate()?;

    let post = state
        .posts
        .update(&id, patch)
        .await
        .map_err(|e| AppError::internal("Error updating post", e))?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .posts
        .delete(&id)
        .await
        .map_err(|e| AppError::internal("Error deleting post", e))?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}

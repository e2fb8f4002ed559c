//! Post CRUD handlers. Each performs exactly one record store call.

use actix_web::{HttpResponse, web};

use quill_core::domain::{NewPost, Post, PostChanges, parse_post_id};
use quill_shared::dto::{CreatePostRequest, UpdatePostRequest};
use quill_shared::{PostListResponse, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = NewPost::new(req.title, req.content, req.author)?;

    let post = state
        .posts
        .create(Post::new(input))
        .await
        .map_err(AppError::storage("Error creating post"))?;

    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(PostResponse::ok(post, "Post created successfully")))
}

/// GET /api/posts - newest first.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list_all()
        .await
        .map_err(AppError::storage("Error fetching posts"))?;

    Ok(HttpResponse::Ok().json(PostListResponse::ok(posts)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = PostChanges::new(req.title, req.content, req.author)?;

    let on_error = AppError::storage("Error updating post");
    let post = match parse_post_id(&path) {
        Ok(id) => state.posts.replace_fields(id, changes).await,
        Err(e) => Err(e),
    }
    .map_err(on_error)?;

    tracing::info!(post_id = %post.id, "Post updated");

    Ok(HttpResponse::Ok().json(PostResponse::ok(post, "Post updated successfully")))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let on_error = AppError::storage("Error deleting post");
    let post = match parse_post_id(&path) {
        Ok(id) => state.posts.delete_by_id(id).await,
        Err(e) => Err(e),
    }
    .map_err(on_error)?;

    tracing::info!(post_id = %post.id, "Post deleted");

    Ok(HttpResponse::Ok().json(PostResponse::ok(post, "Post deleted successfully")))
}

//! Blog API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Blog, BlogInput};

use crate::api::cleanup_replaced;
use crate::core::ServerState;
use crate::db::repository::{BlogRepository, RepoError};
use crate::utils::validation::{
    MAX_ARTICLE_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, repo_error};

fn blog_error(err: RepoError) -> AppError {
    repo_error(err, ErrorCode::BlogNotFound, ErrorCode::AlreadyExists)
}

fn validate(payload: &BlogInput) -> AppResult<()> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.content, "content", MAX_ARTICLE_LEN)?;
    validate_required_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;
    validate_required_text(&payload.image_public_id, "imagePublicId", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.author, "author", MAX_NAME_LEN)?;
    Ok(())
}

/// GET /api/admin/blogs - 博客列表 (最新在前)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Blog>>> {
    let repo = BlogRepository::new(state.db.clone());
    let blogs = repo.find_all().await?;
    Ok(Json(blogs.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/blogs/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Blog>> {
    let repo = BlogRepository::new(state.db.clone());
    let blog = repo
        .find_by_id(&id)
        .await
        .map_err(blog_error)?
        .ok_or_else(|| AppError::new(ErrorCode::BlogNotFound))?;
    Ok(Json(blog.into()))
}

/// POST /api/admin/blogs
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BlogInput>,
) -> AppResult<(StatusCode, Json<Blog>)> {
    validate(&payload)?;

    let repo = BlogRepository::new(state.db.clone());
    let blog = repo.create(payload).await?;

    tracing::info!(id = ?blog.id, title = %blog.title, "Blog created");
    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// PUT /api/admin/blogs/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BlogInput>,
) -> AppResult<Json<Blog>> {
    validate(&payload)?;

    let repo = BlogRepository::new(state.db.clone());
    let replaced = repo.update(&id, payload).await.map_err(blog_error)?;

    cleanup_replaced(
        &state.media,
        replaced.previous.media_assets(),
        &replaced.current.media_assets(),
    )
    .await;

    Ok(Json(replaced.current.into()))
}

/// DELETE /api/admin/blogs/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = BlogRepository::new(state.db.clone());
    let blog = repo.delete(&id).await.map_err(blog_error)?;

    state.media.cleanup(blog.media_assets()).await;

    tracing::info!(id = %id, "Blog deleted");
    Ok(ApiResponse::ok_with_message("Blog deleted successfully"))
}

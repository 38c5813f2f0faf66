//! Logo API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Logo, LogoCreate, LogoUpdate};

use crate::api::cleanup_replaced;
use crate::core::ServerState;
use crate::db::models::logo::LogoChanges;
use crate::db::repository::{LogoRepository, RepoError};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, normalize_optional, validate_optional_text,
    validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, repo_error};

fn logo_error(err: RepoError) -> AppError {
    repo_error(err, ErrorCode::LogoNotFound, ErrorCode::LogoNameExists)
}

/// GET /api/admin/logos - 最新上传在前
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Logo>>> {
    let repo = LogoRepository::new(state.db.clone());
    let logos = repo.find_all().await?;
    Ok(Json(logos.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/logos/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Logo>> {
    let repo = LogoRepository::new(state.db.clone());
    let logo = repo
        .find_by_id(&id)
        .await
        .map_err(logo_error)?
        .ok_or_else(|| AppError::new(ErrorCode::LogoNotFound))?;
    Ok(Json(logo.into()))
}

/// POST /api/admin/logos
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<LogoCreate>,
) -> AppResult<(StatusCode, Json<Logo>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;
    validate_optional_text(&payload.image_public_id, "imagePublicId", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.alt_text, "altText", MAX_NAME_LEN)?;
    payload.alt_text = normalize_optional(payload.alt_text);

    let repo = LogoRepository::new(state.db.clone());
    let logo = repo.create(payload).await.map_err(logo_error)?;

    tracing::info!(id = ?logo.id, name = %logo.name, "Logo created");
    Ok((StatusCode::CREATED, Json(logo.into())))
}

/// PUT /api/admin/logos/:id - 只修改提供且非空的字段
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<LogoUpdate>,
) -> AppResult<Json<Logo>> {
    let changes = LogoChanges {
        name: normalize_optional(payload.name),
        image_url: normalize_optional(payload.image_url),
        image_public_id: normalize_optional(payload.image_public_id),
        alt_text: normalize_optional(payload.alt_text),
    };
    validate_optional_text(&changes.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&changes.image_url, "imageUrl", MAX_URL_LEN)?;
    validate_optional_text(&changes.image_public_id, "imagePublicId", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&changes.alt_text, "altText", MAX_NAME_LEN)?;

    let repo = LogoRepository::new(state.db.clone());
    let replaced = repo.update(&id, changes).await.map_err(logo_error)?;

    cleanup_replaced(
        &state.media,
        replaced.previous.media_assets(),
        &replaced.current.media_assets(),
    )
    .await;

    Ok(Json(replaced.current.into()))
}

/// DELETE /api/admin/logos/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = LogoRepository::new(state.db.clone());
    let logo = repo.delete(&id).await.map_err(logo_error)?;

    state.media.cleanup(logo.media_assets()).await;

    tracing::info!(id = %id, name = %logo.name, "Logo deleted");
    Ok(ApiResponse::ok_with_message("Logo removed"))
}

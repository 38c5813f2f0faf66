//! Hero Slide API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::Value;
use shared::models::{HeroSlide, HeroSlideInput};
use shared::ordering::ReorderResponse;

use crate::api::{ListQuery, cleanup_replaced};
use crate::core::ServerState;
use crate::db::repository::{HeroSlideRepository, RepoError};
use crate::ordering::{OrderedCollectionStore, parse_reorder_body};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, repo_error};

const KIND: &str = "hero";

fn not_found(err: RepoError) -> AppError {
    repo_error(err, ErrorCode::HeroSlideNotFound, ErrorCode::AlreadyExists)
}

fn validate(payload: &HeroSlideInput) -> AppResult<()> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.content, "content", MAX_TEXT_LEN)?;
    validate_required_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;
    validate_required_text(&payload.image_public_id, "imagePublicId", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.cta, "cta", MAX_NAME_LEN)?;
    validate_optional_text(&payload.logo, "logo", MAX_URL_LEN)?;
    validate_optional_text(&payload.location, "location", MAX_NAME_LEN)?;
    validate_optional_text(&payload.date, "date", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

/// GET /api/admin/hero - 轮播列表 (显示顺序)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<HeroSlide>>> {
    let store = OrderedCollectionStore::new(HeroSlideRepository::new(state.db.clone()), KIND);
    let slides = store.list(query.into()).await?;
    Ok(Json(slides))
}

/// GET /api/admin/hero/:id - 获取单个轮播
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<HeroSlide>> {
    let repo = HeroSlideRepository::new(state.db.clone());
    let slide = repo
        .find_by_id(&id)
        .await
        .map_err(not_found)?
        .ok_or_else(|| AppError::new(ErrorCode::HeroSlideNotFound))?;
    Ok(Json(slide.into()))
}

/// POST /api/admin/hero - 创建轮播
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<HeroSlideInput>,
) -> AppResult<(StatusCode, Json<HeroSlide>)> {
    validate(&payload)?;

    let repo = HeroSlideRepository::new(state.db.clone());
    let slide = repo.create(payload).await?;

    tracing::info!(id = ?slide.id, title = %slide.title, "Hero slide created");
    Ok((StatusCode::CREATED, Json(slide.into())))
}

/// PUT /api/admin/hero/:id - 更新轮播
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<HeroSlideInput>,
) -> AppResult<Json<HeroSlide>> {
    validate(&payload)?;

    let repo = HeroSlideRepository::new(state.db.clone());
    let replaced = repo.update(&id, payload).await.map_err(not_found)?;

    cleanup_replaced(
        &state.media,
        replaced.previous.media_assets(),
        &replaced.current.media_assets(),
    )
    .await;

    Ok(Json(replaced.current.into()))
}

/// DELETE /api/admin/hero/:id - 删除轮播及其图片
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = HeroSlideRepository::new(state.db.clone());
    let slide = repo.delete(&id).await.map_err(not_found)?;

    state.media.cleanup(slide.media_assets()).await;

    tracing::info!(id = %id, "Hero slide deleted");
    Ok(ApiResponse::ok_with_message("Hero slide deleted successfully"))
}

/// PUT /api/admin/hero/reorder - 批量设置 `order`
///
/// 部分失败不影响其他项，响应中带有 updated / skipped / failed 计数
pub async fn reorder(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<ReorderResponse>> {
    let updates = parse_reorder_body(body)?;

    let store = OrderedCollectionStore::new(HeroSlideRepository::new(state.db.clone()), KIND);
    let report = store.reorder(&updates).await;

    Ok(Json(ReorderResponse {
        message: "Slides reordered successfully".to_string(),
        report,
    }))
}

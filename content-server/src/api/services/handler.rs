//! Service API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::Value;
use shared::models::{Service, ServiceInput};
use shared::ordering::ReorderResponse;

use crate::api::{ListQuery, cleanup_replaced};
use crate::core::ServerState;
use crate::db::repository::{RepoError, ServiceRepository};
use crate::ordering::{OrderedCollectionStore, parse_reorder_body};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, repo_error};

const KIND: &str = "service";

fn service_error(err: RepoError) -> AppError {
    repo_error(err, ErrorCode::ServiceNotFound, ErrorCode::AlreadyExists)
}

fn validate(payload: &ServiceInput) -> AppResult<()> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_TEXT_LEN)?;
    validate_required_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_required_text(&payload.image_public_id, "imagePublicId", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.icon, "icon", MAX_URL_LEN)?;
    validate_optional_text(&payload.page_path, "pagePath", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

/// GET /api/admin/services - 服务列表 (显示顺序)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Service>>> {
    let store = OrderedCollectionStore::new(ServiceRepository::new(state.db.clone()), KIND);
    let services = store.list(query.into()).await?;
    Ok(Json(services))
}

/// GET /api/admin/services/:id - 获取单个服务
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Service>> {
    let repo = ServiceRepository::new(state.db.clone());
    let service = repo
        .find_by_id(&id)
        .await
        .map_err(service_error)?
        .ok_or_else(|| AppError::new(ErrorCode::ServiceNotFound))?;
    Ok(Json(service.into()))
}

/// POST /api/admin/services - 创建服务
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ServiceInput>,
) -> AppResult<(StatusCode, Json<Service>)> {
    validate(&payload)?;

    let repo = ServiceRepository::new(state.db.clone());
    let service = repo.create(payload).await?;

    tracing::info!(id = ?service.id, title = %service.title, "Service created");
    Ok((StatusCode::CREATED, Json(service.into())))
}

/// PUT /api/admin/services/:id - 更新服务
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ServiceInput>,
) -> AppResult<Json<Service>> {
    validate(&payload)?;

    let repo = ServiceRepository::new(state.db.clone());
    let replaced = repo.update(&id, payload).await.map_err(service_error)?;

    cleanup_replaced(
        &state.media,
        replaced.previous.media_assets(),
        &replaced.current.media_assets(),
    )
    .await;

    Ok(Json(replaced.current.into()))
}

/// DELETE /api/admin/services/:id - 删除服务及其媒体
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = ServiceRepository::new(state.db.clone());
    let service = repo.delete(&id).await.map_err(service_error)?;

    state.media.cleanup(service.media_assets()).await;

    tracing::info!(id = %id, "Service deleted");
    Ok(ApiResponse::ok_with_message("Service deleted successfully"))
}

/// PUT /api/admin/services/reorder - 批量设置 `order`
pub async fn reorder(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<ReorderResponse>> {
    let updates = parse_reorder_body(body)?;

    let store = OrderedCollectionStore::new(ServiceRepository::new(state.db.clone()), KIND);
    let report = store.reorder(&updates).await;

    Ok(Json(ReorderResponse {
        message: "Services reordered successfully".to_string(),
        report,
    }))
}

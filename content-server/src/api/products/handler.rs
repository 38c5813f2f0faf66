//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::Value;
use shared::models::{MediaAsset, PreviewItem, Product, ProductInput, ShowcaseItem};
use shared::ordering::ReorderResponse;

use crate::api::{ListQuery, cleanup_replaced};
use crate::core::ServerState;
use crate::db::repository::{ProductRepository, RepoError};
use crate::ordering::{OrderedCollectionStore, parse_reorder_body};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, repo_error};

const KIND: &str = "product";

fn product_error(err: RepoError) -> AppError {
    repo_error(err, ErrorCode::ProductNotFound, ErrorCode::ProductPagePathExists)
}

/// A required asset must carry both url and public id
fn require_asset(asset: Option<&MediaAsset>, field: &str) -> AppResult<()> {
    match asset {
        Some(asset) if asset.is_complete() => Ok(()),
        _ => Err(AppError::required(field)),
    }
}

fn validate(payload: &ProductInput) -> AppResult<()> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_TEXT_LEN)?;
    validate_required_text(&payload.page_path, "pagePath", MAX_SHORT_TEXT_LEN)?;
    require_asset(payload.hero_image.as_ref(), "heroImage")?;
    if let Some(features) = &payload.features {
        for feature in features {
            validate_required_text(feature, "features", MAX_NAME_LEN)?;
        }
    }
    Ok(())
}

/// GET /api/admin/products - 产品列表 (显示顺序)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let store = OrderedCollectionStore::new(ProductRepository::new(state.db.clone()), KIND);
    let products = store.list(query.into()).await?;
    Ok(Json(products))
}

/// GET /api/admin/products/:id - 获取单个产品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await
        .map_err(product_error)?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;
    Ok(Json(product.into()))
}

/// POST /api/admin/products - 创建产品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    validate(&payload)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await.map_err(product_error)?;

    tracing::info!(id = ?product.id, page_path = %product.page_path, "Product created");
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /api/admin/products/:id - 更新产品
///
/// 被替换掉的图片 / 音频会从图床删除
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductInput>,
) -> AppResult<Json<Product>> {
    validate(&payload)?;

    let repo = ProductRepository::new(state.db.clone());
    let replaced = repo.update(&id, payload).await.map_err(product_error)?;

    cleanup_replaced(
        &state.media,
        replaced.previous.media_assets(),
        &replaced.current.media_assets(),
    )
    .await;

    Ok(Json(replaced.current.into()))
}

/// DELETE /api/admin/products/:id - 删除产品及其全部媒体
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo.delete(&id).await.map_err(product_error)?;

    state.media.cleanup(product.media_assets()).await;

    tracing::info!(id = %id, "Product deleted");
    Ok(ApiResponse::ok_with_message("Product deleted successfully"))
}

/// PUT /api/admin/products/reorder - 批量设置 `order`
pub async fn reorder(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<ReorderResponse>> {
    let updates = parse_reorder_body(body)?;

    let store = OrderedCollectionStore::new(ProductRepository::new(state.db.clone()), KIND);
    let report = store.reorder(&updates).await;

    Ok(Json(ReorderResponse {
        message: "Products reordered successfully".to_string(),
        report,
    }))
}

/// POST /api/admin/products/:id/preview - 追加预览项
pub async fn add_preview_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(item): Json<PreviewItem>,
) -> AppResult<Json<Product>> {
    validate_required_text(&item.title, "title", MAX_NAME_LEN)?;
    require_asset(Some(&item.desktop), "desktop")?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .add_preview_item(&id, item)
        .await
        .map_err(product_error)?;
    Ok(Json(product.into()))
}

/// POST /api/admin/products/:id/showcase - 追加展示项
pub async fn add_showcase_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(item): Json<ShowcaseItem>,
) -> AppResult<Json<Product>> {
    validate_required_text(&item.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&item.description, "description", MAX_TEXT_LEN)?;
    require_asset(Some(&item.desktop), "desktop")?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .add_showcase_item(&id, item)
        .await
        .map_err(product_error)?;
    Ok(Json(product.into()))
}

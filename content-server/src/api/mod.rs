//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 注册、登录、当前用户
//! - [`hero`] - 首页轮播 (可排序)
//! - [`products`] - 产品 (可排序)
//! - [`services`] - 服务 (可排序)
//! - [`blogs`] - 博客
//! - [`logos`] - 合作伙伴 Logo
//! - [`reviews`] - 评价 (公开提交 + 管理审核)
//! - [`contacts`] - 联系表单 (公开提交 + 管理查看)

pub mod auth;
pub mod health;

// Ordered content
pub mod hero;
pub mod products;
pub mod services;

// Editorial content
pub mod blogs;
pub mod contacts;
pub mod logos;
pub mod reviews;

use serde::Deserialize;
use shared::models::MediaAsset;

use crate::db::repository::ListFilter;
use crate::services::media::replaced_assets;
use crate::services::MediaCleanup;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};

/// `?active=` query of ordered list endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    pub active: Option<bool>,
}

impl From<ListQuery> for ListFilter {
    fn from(query: ListQuery) -> Self {
        ListFilter {
            active: query.active,
        }
    }
}

/// Destroy hosted media that an update no longer references
pub(crate) async fn cleanup_replaced(
    media: &MediaCleanup,
    previous: Vec<MediaAsset>,
    current: &[MediaAsset],
) {
    let stale = replaced_assets(previous, current);
    if !stale.is_empty() {
        media.cleanup(stale).await;
    }
}

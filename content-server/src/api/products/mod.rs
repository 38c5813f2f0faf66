//! Product API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/admin/products | GET | 产品列表 (`?active=true` 只返回启用项) | 无 |
//! | /api/admin/products | POST | 创建产品 | 管理员 |
//! | /api/admin/products/reorder | PUT | 批量更新 `order` | 管理员 |
//! | /api/admin/products/{id} | GET | 单个产品 | 无 |
//! | /api/admin/products/{id} | PUT / DELETE | 更新 / 删除 | 管理员 |
//! | /api/admin/products/{id}/preview | POST | 追加预览项 | 管理员 |
//! | /api/admin/products/{id}/showcase | POST | 追加展示项 | 管理员 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin/products", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/reorder", put(handler::reorder))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/preview", post(handler::add_preview_item))
        .route("/{id}/showcase", post(handler::add_showcase_item))
}

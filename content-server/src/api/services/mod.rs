//! Service API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/admin/services | GET | 服务列表 (`?active=true` 只返回启用项) | 无 |
//! | /api/admin/services | POST | 创建服务 | 管理员 |
//! | /api/admin/services/reorder | PUT | 批量更新 `order` | 管理员 |
//! | /api/admin/services/{id} | GET | 单个服务 | 无 |
//! | /api/admin/services/{id} | PUT / DELETE | 更新 / 删除 | 管理员 |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin/services", routes())
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
}

//! Blog API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// 读取公开，写入需要管理员 (由全局认证中间件判断)
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin/blogs", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}

//! Contact API 模块
//!
//! 公开表单提交，管理员查看 / 标记已读 / 删除
//!
//! 管理接口同时挂在 `/api/admin/contacts` 与 `/api/contacts` 下，
//! `/api/contacts/public` 是唯一的公开路径。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/contacts/public", post(handler::submit))
        .nest("/api/admin/contacts", admin_routes())
        .nest("/api/contacts", admin_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list)).route(
        "/{id}",
        get(handler::get_by_id)
            .put(handler::update)
            .delete(handler::delete),
    )
}

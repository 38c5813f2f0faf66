//! Review API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/reviews/public | POST | 提交评价 (待审核) | 无 |
//! | /api/reviews/public/approved | GET | 已通过的评价 | 无 |
//! | /api/admin/reviews | GET | 全部评价 | 管理员 |
//! | /api/admin/reviews/{id} | GET / PUT / DELETE | 查看 / 审核 / 删除 | 管理员 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/reviews/public", post(handler::submit))
        .route("/api/reviews/public/approved", get(handler::list_approved))
        .nest("/api/admin/reviews", admin_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list)).route(
        "/{id}",
        get(handler::get_by_id)
            .put(handler::update)
            .delete(handler::delete),
    )
}

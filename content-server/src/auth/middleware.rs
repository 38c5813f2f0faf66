//! 认证中间件
//!
//! 按路由策略调用 [`AdminGate`]，通过后将 [`CurrentUser`] 注入请求扩展。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;

use crate::auth::{CurrentUser, credential_from_headers};
use crate::core::ServerState;
use crate::utils::AppError;

/// Access level required by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

/// Admin collections whose reads are private too
const PRIVATE_COLLECTIONS: &[&str] = &[
    "/api/admin/contacts",
    "/api/contacts",
    "/api/admin/logos",
    "/api/admin/reviews",
];

const PUBLIC_ROUTES: &[&str] = &[
    "/api/auth/login",
    "/api/auth/register",
    "/api/contacts/public",
    "/api/reviews/public",
    "/api/reviews/public/approved",
];

fn under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Route policy
///
/// - `OPTIONS` and non-`/api/` paths are public
/// - site content (`/api/admin/{hero,products,services,blogs}`) is publicly
///   readable, every mutation needs an admin
/// - contacts (under either prefix), logos and reviews need an admin for
///   every method
/// - `/api/auth/user` needs any valid account
pub fn access_for(method: &Method, path: &str) -> Access {
    if method == Method::OPTIONS || !path.starts_with("/api/") {
        return Access::Public;
    }
    if PUBLIC_ROUTES.contains(&path) {
        return Access::Public;
    }
    if path == "/api/auth/user" {
        return Access::Authenticated;
    }
    if PRIVATE_COLLECTIONS.iter().any(|p| under(path, p)) {
        return Access::Admin;
    }
    if under(path, "/api/admin") && (method == Method::GET || method == Method::HEAD) {
        return Access::Public;
    }
    Access::Admin
}

/// 认证中间件
///
/// 凭证来自 `Authorization: Bearer <token>` 或旧版 `x-auth-token` 头。
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无令牌 | 401 NotAuthenticated |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 TokenInvalid |
/// | 非管理员 | 403 AdminRequired |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let access = access_for(req.method(), req.uri().path());
    let credential = credential_from_headers(req.headers());

    let user: CurrentUser = match access {
        Access::Public => return Ok(next.run(req).await),
        Access::Authenticated => state.gate.authenticate(credential).await?,
        Access::Admin => state.gate.authorize(credential).await?,
    };

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

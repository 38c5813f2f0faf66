//! 认证授权模块
//!
//! - [`JwtService`] - JWT 令牌服务
//! - [`AdminGate`] - 令牌校验 + 管理员标志查询
//! - [`CurrentUser`] - 当前用户上下文
//! - [`require_auth`] - 按路由策略执行门禁的中间件

pub mod extractor;
pub mod gate;
pub mod jwt;
pub mod middleware;

pub use gate::{AccountLookup, AdminGate, CurrentUser, credential_from_headers};
pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::{Access, access_for, require_auth};

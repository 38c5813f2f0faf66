//! 管理员门禁
//!
//! 校验请求携带的令牌，再从账号存储读取管理员标志：
//!
//! | 情况 | 结果 |
//! |------|------|
//! | 没有令牌 | 401 NotAuthenticated |
//! | 令牌无效 / 账号不存在 | 401 TokenInvalid |
//! | 令牌过期 | 401 TokenExpired |
//! | 非管理员访问管理接口 | 403 AdminRequired |

use std::sync::Arc;

use async_trait::async_trait;
use http::HeaderMap;

use crate::auth::{JwtError, JwtService};
use crate::db::repository::UserRepository;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Legacy credential header still sent by older dashboards
pub const LEGACY_TOKEN_HEADER: &str = "x-auth-token";

/// 当前用户上下文
///
/// 由门禁中间件创建，注入到请求扩展
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// 用户 ID (`user:xxx`)
    pub id: String,
    /// 用户名
    pub username: String,
    /// 管理员标志 (来自数据库，而非令牌)
    pub is_admin: bool,
}

/// Account store seen by the gate
#[async_trait]
pub trait AccountLookup: Send + Sync {
    async fn find_account(&self, id: &str) -> AppResult<Option<CurrentUser>>;
}

#[async_trait]
impl AccountLookup for UserRepository {
    async fn find_account(&self, id: &str) -> AppResult<Option<CurrentUser>> {
        let user = match self.find_by_id(id).await {
            Ok(user) => user,
            // A token whose subject is not a user id cannot match an account
            Err(crate::db::repository::RepoError::Validation(_)) => None,
            Err(e) => return Err(e.into()),
        };
        Ok(user.map(|u| {
            let user: shared::models::User = u.into();
            CurrentUser {
                id: user.id,
                username: user.username,
                is_admin: user.is_admin,
            }
        }))
    }
}

/// Bearer token or legacy header, whichever is present
pub fn credential_from_headers(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
    {
        return Some(token);
    }

    headers
        .get(LEGACY_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Credential validation plus admin-flag lookup
#[derive(Clone)]
pub struct AdminGate {
    jwt: Arc<JwtService>,
    accounts: Arc<dyn AccountLookup>,
}

impl AdminGate {
    pub fn new(jwt: Arc<JwtService>, accounts: Arc<dyn AccountLookup>) -> Self {
        Self { jwt, accounts }
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    /// Resolve the account behind a credential
    pub async fn authenticate(&self, credential: Option<&str>) -> AppResult<CurrentUser> {
        let Some(token) = credential else {
            security_log!("WARN", "auth_missing");
            return Err(AppError::not_authenticated());
        };

        let claims = self.jwt.validate_token(token).map_err(|e| {
            security_log!("WARN", "auth_failed", error = format!("{}", e));
            match e {
                JwtError::ExpiredToken => AppError::token_expired(),
                _ => AppError::invalid_token("Token is not valid"),
            }
        })?;

        match self.accounts.find_account(&claims.sub).await? {
            Some(user) => Ok(user),
            None => {
                security_log!(
                    "WARN",
                    "auth_unknown_account",
                    user_id = claims.sub.clone(),
                    username = claims.username.clone()
                );
                Err(AppError::invalid_token("Token is not valid"))
            }
        }
    }

    /// Resolve the account and require the admin flag
    pub async fn authorize(&self, credential: Option<&str>) -> AppResult<CurrentUser> {
        let user = self.authenticate(credential).await?;
        if !user.is_admin {
            security_log!(
                "WARN",
                "admin_required",
                user_id = user.id.clone(),
                username = user.username.clone()
            );
            return Err(AppError::admin_required());
        }
        Ok(user)
    }
}

//! 统一错误处理
//!
//! HTTP 层使用 `shared::error` 中的统一错误类型：
//! - [`AppError`] - 错误码 + 消息 + 详情
//! - [`ApiResponse`] - 统一响应结构
//!
//! 仓储层错误 ([`RepoError`]) 在 handler 边界转换为 [`AppError`]。
//!
//! # 使用示例
//!
//! ```ignore
//! let slide = repo
//!     .find_by_id(&id)
//!     .await?
//!     .ok_or_else(|| AppError::new(ErrorCode::HeroSlideNotFound))?;
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Map a repository error, replacing generic not-found / duplicate codes with
/// the resource-specific ones
pub fn repo_error(err: RepoError, not_found: ErrorCode, duplicate: ErrorCode) -> AppError {
    match err {
        RepoError::NotFound(_) => AppError::new(not_found),
        RepoError::Duplicate(msg) => AppError::with_message(duplicate, msg),
        other => other.into(),
    }
}

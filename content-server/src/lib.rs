//! Content Server - 企业官网内容管理后端
//!
//! # 架构概述
//!
//! 为官网前台和管理后台提供 JSON API：
//!
//! - **排序集合** (`ordering`): Hero / Product / Service 的显示顺序与批量重排
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **认证** (`auth`): JWT + Argon2，管理员标志每次从数据库读取
//! - **外部协作** (`services`): 图床媒体清理、联系表单通知
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! content-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # JWT 认证、管理员门禁
//! ├── ordering/      # 排序集合核心
//! ├── services/      # 媒体清理、邮件通知
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志、校验、时间
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod ordering;
pub mod services;
pub mod utils;

use std::path::PathBuf;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, build_app};
pub use ordering::{OrderedCollectionStore, OrderedRepository};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event
            $(, $key = $value)*
        );
    };
}

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 初始化日志 (`LOG_LEVEL`, `LOG_DIR`；生产环境输出 JSON)
/// 3. 配置了日志目录时启动过期日志清理任务
///
/// 必须在 tokio 运行时内调用
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json_format = std::env::var("ENVIRONMENT").is_ok_and(|env| env == "production");
    let log_dir = std::env::var("LOG_DIR")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);

    init_logger(&level, json_format, log_dir.as_deref())?;

    if let Some(dir) = log_dir {
        tokio::spawn(utils::logger::periodic_cleanup(dir));
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  ____            _             _
 / ___|___  _ __ | |_ ___ _ __ | |_
| |   / _ \| '_ \| __/ _ \ '_ \| __|
| |__| (_) | | | | ||  __/ | | | |_
 \____\___/|_| |_|\__\___|_| |_|\__|
    "#
    );
}

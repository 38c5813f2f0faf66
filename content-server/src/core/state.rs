use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{AdminGate, JwtService};
use crate::core::{Config, ServerError};
use crate::db::DbService;
use crate::db::repository::UserRepository;
use crate::services::{ContactNotifier, LogMailer, MediaCleanup};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 签发与校验 |
/// | gate | Arc<AdminGate> | 令牌 + 管理员标志校验 |
/// | media | MediaCleanup | 外部媒体清理 |
/// | notifier | ContactNotifier | 联系表单通知 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 管理员门禁
    pub gate: Arc<AdminGate>,
    /// 媒体清理 (未配置时为空操作)
    pub media: MediaCleanup,
    /// 联系表单通知
    pub notifier: ContactNotifier,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database)
    /// 3. 各服务 (JWT, 门禁, 媒体清理, 通知)
    /// 4. 启动管理员账号 (ADMIN_USERNAME / ADMIN_PASSWORD)
    pub async fn initialize(config: &Config) -> Result<Self, ServerError> {
        config.ensure_work_dir_structure()?;

        let db_service = DbService::new(&config.database_dir())
            .await
            .map_err(|e| ServerError::Database(e.message))?;

        let state = Self::with_db(config.clone(), db_service.db);
        state.bootstrap_admin().await?;
        Ok(state)
    }

    /// 使用已打开的数据库构造状态
    ///
    /// 测试中配合临时目录使用
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let gate = Arc::new(AdminGate::new(
            jwt_service.clone(),
            Arc::new(UserRepository::new(db.clone())),
        ));
        let media = MediaCleanup::from_config(&config.media);
        let notifier = ContactNotifier::new(config.notify.clone(), Arc::new(LogMailer));

        Self {
            config,
            db,
            jwt_service,
            gate,
            media,
            notifier,
        }
    }

    /// Create or promote the configured admin account
    async fn bootstrap_admin(&self) -> Result<(), ServerError> {
        let Some(admin) = &self.config.bootstrap_admin else {
            return Ok(());
        };

        let created = UserRepository::new(self.db.clone())
            .ensure_admin(&admin.username, &admin.password)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;
        if created {
            tracing::info!(username = %admin.username, "Bootstrap admin account created");
        } else {
            tracing::debug!(username = %admin.username, "Bootstrap admin account present");
        }
        Ok(())
    }
}

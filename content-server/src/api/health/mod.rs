//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 存活检查 | 无 |
//! | /health/detailed | GET | 数据库、排序集合、外部协作者状态 | 无 |
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "uptime_seconds": 3600,
//!   "checks": {
//!     "database": { "status": "ok", "latency_ms": 2 },
//!     "media_host": { "status": "disabled", "message": "..." },
//!     "contact_notifications": { "status": "ok" }
//!   },
//!   "collections": { "hero": 4, "products": 7, "services": 5 }
//! }
//! ```

use std::sync::OnceLock;
use std::time::Instant;

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::ServerState;
use crate::db::repository::{hero, product, service};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

static STARTED_AT: OnceLock<Instant> = OnceLock::new();

fn uptime_seconds() -> u64 {
    STARTED_AT.get_or_init(Instant::now).elapsed().as_secs()
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
}

#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    checks: HealthChecks,
    /// 排序集合的文档数 (数据库不可用时为空)
    #[serde(skip_serializing_if = "Option::is_none")]
    collections: Option<CollectionCounts>,
}

#[derive(Serialize)]
pub struct HealthChecks {
    database: CheckResult,
    media_host: CheckResult,
    contact_notifications: CheckResult,
}

#[derive(Serialize)]
pub struct CollectionCounts {
    hero: u64,
    products: u64,
    services: u64,
}

/// ok | disabled | error
#[derive(Serialize)]
pub struct CheckResult {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn new(status: &'static str, message: Option<String>) -> Self {
        Self {
            status,
            latency_ms: None,
            message,
        }
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Deserialize)]
struct CountRow {
    total: u64,
}

async fn count(db: &Surreal<Db>, table: &str) -> surrealdb::Result<u64> {
    let mut response = db
        .query("SELECT count() AS total FROM type::table($table) GROUP ALL")
        .bind(("table", table.to_string()))
        .await?;
    let row: Option<CountRow> = response.take(0)?;
    Ok(row.map_or(0, |r| r.total))
}

async fn collection_counts(db: &Surreal<Db>) -> surrealdb::Result<CollectionCounts> {
    Ok(CollectionCounts {
        hero: count(db, hero::TABLE).await?,
        products: count(db, product::TABLE).await?,
        services: count(db, service::TABLE).await?,
    })
}

/// GET /health
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
    })
}

/// GET /health/detailed
///
/// 数据库不可达时状态为 `degraded`；未配置图床或管理员邮箱只显示为
/// `disabled`，不影响整体状态。
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let started = Instant::now();
    let (database, collections) = match state.db.health().await {
        Ok(()) => {
            let mut check = CheckResult::new("ok", None);
            check.latency_ms = Some(started.elapsed().as_millis() as u64);
            let counts = collection_counts(&state.db)
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Collection count failed"))
                .ok();
            (check, counts)
        }
        Err(e) => (CheckResult::new("error", Some(format!("Database error: {}", e))), None),
    };

    let media_host = if state.config.media.is_configured() {
        CheckResult::new("ok", None)
    } else {
        CheckResult::new(
            "disabled",
            Some("Media host credentials not set; deletions are skipped".to_string()),
        )
    };

    let contact_notifications = match &state.config.notify.admin_email {
        Some(_) => CheckResult::new("ok", None),
        None => CheckResult::new("disabled", Some("ADMIN_EMAIL not set".to_string())),
    };

    Json(DetailedHealthResponse {
        status: if database.is_ok() { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime_seconds(),
        checks: HealthChecks {
            database,
            media_host,
            contact_notifications,
        },
        collections,
    })
}

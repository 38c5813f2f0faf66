//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) holding one table per content kind.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Namespace / database used by the server
pub const NAMESPACE: &str = "site";
pub const DATABASE: &str = "content";

/// Table definitions and unique indexes, applied on every start
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS hero_slide SCHEMALESS;
DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
DEFINE TABLE IF NOT EXISTS service SCHEMALESS;
DEFINE TABLE IF NOT EXISTS blog SCHEMALESS;
DEFINE TABLE IF NOT EXISTS logo SCHEMALESS;
DEFINE TABLE IF NOT EXISTS review SCHEMALESS;
DEFINE TABLE IF NOT EXISTS contact SCHEMALESS;
DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
DEFINE INDEX IF NOT EXISTS product_page_path ON product FIELDS page_path UNIQUE;
DEFINE INDEX IF NOT EXISTS logo_name ON logo FIELDS name UNIQUE;
DEFINE INDEX IF NOT EXISTS user_username ON user FIELDS username UNIQUE;
DEFINE INDEX IF NOT EXISTS review_status ON review FIELDS status;
"#;

/// Database service owning the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database under `path` and apply the schema
    pub async fn new(path: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::with_db(db).await
    }

    /// Select namespace/database on an already opened handle and apply the schema
    pub async fn with_db(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        tracing::info!(namespace = NAMESPACE, database = DATABASE, "Database ready");
        Ok(Self { db })
    }
}

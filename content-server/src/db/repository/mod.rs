//! Repository Module
//!
//! Provides CRUD operations for the content tables on SurrealDB.

// Ordered content
pub mod hero;
pub mod product;
pub mod service;

// Editorial
pub mod blog;
pub mod logo;
pub mod review;

// Inbox / accounts
pub mod contact;
pub mod user;

// Re-exports
pub use blog::BlogRepository;
pub use contact::ContactRepository;
pub use hero::HeroSlideRepository;
pub use logo::LogoRepository;
pub use product::ProductRepository;
pub use review::ReviewRepository;
pub use service::ServiceRepository;
pub use user::{NewUser, UserRepository};

use serde::de::DeserializeOwned;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:key" 格式
// =============================================================================
//
// API 返回 `_id: "hero_slide:abc"`；路径参数与 reorder 请求同时接受
// "hero_slide:abc" 和裸 key "abc"。其他表前缀视为非法 id。

/// Resolve an API id into a record id of `table`
pub fn record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RepoError::Validation("Id must not be empty".to_string()));
    }

    if !id.contains(':') {
        return Ok(RecordId::from_table_key(table, id.to_string()));
    }

    let rid: RecordId = id
        .parse()
        .map_err(|_| RepoError::Validation(format!("Invalid id: {}", id)))?;
    if rid.table() != table {
        return Err(RepoError::Validation(format!(
            "Id {} does not belong to {}",
            id, table
        )));
    }
    Ok(rid)
}

/// Optional visibility filter for ordered lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// `Some(true)` for public consumers, `None` for the admin list
    pub active: Option<bool>,
}

impl ListFilter {
    pub fn all() -> Self {
        Self { active: None }
    }

    pub fn active_only() -> Self {
        Self { active: Some(true) }
    }
}

/// Result of a single-field update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

/// Document before and after a full update
#[derive(Debug, Clone)]
pub struct Replaced<T> {
    pub previous: T,
    pub current: T,
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Select one record by API id
    pub async fn find<T: DeserializeOwned>(&self, table: &str, id: &str) -> RepoResult<Option<T>> {
        let thing = record_id(table, id)?;
        let record: Option<T> = self.db.select(thing).await?;
        Ok(record)
    }

    /// Delete one record by API id, returning the removed document
    pub async fn remove<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
    ) -> RepoResult<Option<T>> {
        let thing = record_id(table, id)?;
        let removed: Option<T> = self.db.delete(thing).await?;
        Ok(removed)
    }

    /// Replace the content of an existing record, keeping its id
    pub async fn replace<T>(&self, table: &str, id: &str, content: T) -> RepoResult<T>
    where
        T: serde::Serialize + DeserializeOwned + 'static,
    {
        let thing = record_id(table, id)?;
        let mut result = self
            .db
            .query("UPDATE $thing CONTENT $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", content))
            .await?;
        result
            .take::<Option<T>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("{} {} not found", table, id)))
    }

    /// Canonically sorted list of an ordered table
    ///
    /// `sort_order ASC, created_at DESC, id ASC`
    pub async fn find_ordered<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: ListFilter,
    ) -> RepoResult<Vec<T>> {
        let mut sql = String::from("SELECT * FROM type::table($table)");
        if filter.active.is_some() {
            sql.push_str(" WHERE is_active = $active");
        }
        sql.push_str(" ORDER BY sort_order ASC, created_at DESC, id ASC");

        let mut query = self.db.query(sql).bind(("table", table.to_string()));
        if let Some(active) = filter.active {
            query = query.bind(("active", active));
        }
        let items: Vec<T> = query.await?.take(0)?;
        Ok(items)
    }

    /// Set `sort_order` on one record of an ordered table
    ///
    /// One `UPDATE` statement; it never creates a record, so an id that is
    /// unknown or deleted concurrently reports [`UpdateOutcome::NotFound`].
    /// Malformed ids are a validation error.
    pub async fn set_sort_order<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        order: i64,
    ) -> RepoResult<UpdateOutcome> {
        let thing = record_id(table, id)?;
        let mut result = self
            .db
            .query("UPDATE $thing SET sort_order = $order RETURN AFTER")
            .bind(("thing", thing))
            .bind(("order", order))
            .await?;
        let updated: Option<T> = result.take(0)?;
        Ok(match updated {
            Some(_) => UpdateOutcome::Updated,
            None => UpdateOutcome::NotFound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_prefixed_and_bare() {
        let rid = record_id("hero_slide", "hero_slide:abc").unwrap();
        assert_eq!(rid.table(), "hero_slide");
        assert_eq!(rid, RecordId::from_table_key("hero_slide", "abc".to_string()));

        let rid = record_id("hero_slide", "abc").unwrap();
        assert_eq!(rid.to_string(), "hero_slide:abc");
    }

    #[test]
    fn test_record_id_rejects_foreign_table() {
        let err = record_id("product", "service:abc").unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[test]
    fn test_record_id_rejects_empty() {
        assert!(matches!(
            record_id("product", "  "),
            Err(RepoError::Validation(_))
        ));
    }
}

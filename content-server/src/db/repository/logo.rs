//! Logo Repository

use super::{BaseRepository, RepoError, RepoResult, Replaced, record_id};
use crate::db::models::Logo;
use crate::db::models::logo::{LogoChanges, default_alt_text};
use crate::utils::now_millis;
use shared::models::LogoCreate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "logo";

#[derive(Clone)]
pub struct LogoRepository {
    base: BaseRepository,
}

impl LogoRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All logos, most recently uploaded first
    pub async fn find_all(&self) -> RepoResult<Vec<Logo>> {
        let logos: Vec<Logo> = self
            .base
            .db()
            .query("SELECT * FROM logo ORDER BY uploaded_at DESC")
            .await?
            .take(0)?;
        Ok(logos)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Logo>> {
        self.base.find(TABLE, id).await
    }

    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Logo>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM logo WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let logos: Vec<Logo> = result.take(0)?;
        Ok(logos.into_iter().next())
    }

    pub async fn create(&self, data: LogoCreate) -> RepoResult<Logo> {
        let name = data.name.trim().to_string();
        if self.find_by_name(&name).await?.is_some() {
            return Err(RepoError::Duplicate(format!("Logo '{}' already exists", name)));
        }

        let logo = Logo {
            id: None,
            name,
            image_url: data.image_url,
            image_public_id: data.image_public_id.unwrap_or_default(),
            alt_text: data.alt_text.unwrap_or_else(default_alt_text),
            uploaded_at: now_millis(),
        };

        let created: Option<Logo> = self.base.db().create(TABLE).content(logo).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create logo".to_string()))
    }

    /// Apply a partial update; fields left as `None` are untouched
    pub async fn update(&self, id: &str, changes: LogoChanges) -> RepoResult<Replaced<Logo>> {
        let thing = record_id(TABLE, id)?;
        let previous = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Logo {} not found", id)))?;

        if let Some(ref new_name) = changes.name
            && new_name != &previous.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Logo '{}' already exists",
                new_name
            )));
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", changes))
            .await?;
        let current = result
            .take::<Option<Logo>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Logo {} not found", id)))?;
        Ok(Replaced { previous, current })
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Logo> {
        self.base
            .remove(TABLE, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Logo {} not found", id)))
    }
}

//! Blog Repository

use super::{BaseRepository, RepoError, RepoResult, Replaced};
use crate::db::models::Blog;
use crate::db::models::blog::default_author;
use crate::utils::now_millis;
use shared::models::BlogInput;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "blog";

#[derive(Clone)]
pub struct BlogRepository {
    base: BaseRepository,
}

impl BlogRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All posts, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Blog>> {
        let blogs: Vec<Blog> = self
            .base
            .db()
            .query("SELECT * FROM blog ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(blogs)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Blog>> {
        self.base.find(TABLE, id).await
    }

    pub async fn create(&self, data: BlogInput) -> RepoResult<Blog> {
        let now = now_millis();
        let blog = Blog {
            id: None,
            title: data.title.trim().to_string(),
            content: data.content.trim().to_string(),
            author: data.author.unwrap_or_else(default_author),
            image_url: data.image_url,
            image_public_id: data.image_public_id,
            tags: data.tags.unwrap_or_default(),
            date: data.date.unwrap_or(now),
            created_at: now,
        };

        let created: Option<Blog> = self.base.db().create(TABLE).content(blog).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create blog".to_string()))
    }

    /// Replace the payload of a post; author, tags and date fall back to the stored values
    pub async fn update(&self, id: &str, data: BlogInput) -> RepoResult<Replaced<Blog>> {
        let previous = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Blog {} not found", id)))?;

        let blog = Blog {
            id: None,
            title: data.title.trim().to_string(),
            content: data.content.trim().to_string(),
            author: data.author.unwrap_or_else(|| previous.author.clone()),
            image_url: data.image_url,
            image_public_id: data.image_public_id,
            tags: data.tags.unwrap_or_else(|| previous.tags.clone()),
            date: data.date.unwrap_or(previous.date),
            created_at: previous.created_at,
        };

        let current = self.base.replace(TABLE, id, blog).await?;
        Ok(Replaced { previous, current })
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Blog> {
        self.base
            .remove(TABLE, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Blog {} not found", id)))
    }
}

//! Review Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Review;
use crate::db::models::review::ReviewChanges;
use crate::utils::now_millis;
use shared::models::ReviewStatus;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "review";

#[derive(Clone)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All reviews, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .base
            .db()
            .query("SELECT * FROM review ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// Reviews with the given moderation status, newest first
    pub async fn find_by_status(&self, status: ReviewStatus) -> RepoResult<Vec<Review>> {
        let reviews: Vec<Review> = self
            .base
            .db()
            .query("SELECT * FROM review WHERE status = $status ORDER BY created_at DESC")
            .bind(("status", status.as_str().to_string()))
            .await?
            .take(0)?;
        Ok(reviews)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Review>> {
        self.base.find(TABLE, id).await
    }

    /// Store a new submission as pending
    pub async fn create(
        &self,
        reviewer_name: String,
        rating: u8,
        comment: String,
        product_or_service_id: Option<String>,
    ) -> RepoResult<Review> {
        let review = Review {
            id: None,
            reviewer_name,
            rating,
            comment,
            product_or_service_id,
            status: ReviewStatus::Pending,
            created_at: now_millis(),
        };

        let created: Option<Review> = self.base.db().create(TABLE).content(review).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create review".to_string()))
    }

    /// Apply moderation changes
    pub async fn update(&self, id: &str, changes: ReviewChanges) -> RepoResult<Review> {
        let thing = record_id(TABLE, id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Review {} not found", id)))?;
        if changes.is_empty() {
            return Ok(existing);
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", changes))
            .await?;
        result
            .take::<Option<Review>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Review {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Review> {
        self.base
            .remove(TABLE, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Review {} not found", id)))
    }
}

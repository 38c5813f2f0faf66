//! Hero Slide Repository

use super::{BaseRepository, ListFilter, RepoError, RepoResult, Replaced, UpdateOutcome};
use crate::db::models::HeroSlide;
use crate::ordering::OrderedRepository;
use crate::utils::now_millis;
use shared::models::HeroSlideInput;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "hero_slide";

#[derive(Clone)]
pub struct HeroSlideRepository {
    base: BaseRepository,
}

impl HeroSlideRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Slides in display order
    pub async fn find_all(&self, filter: ListFilter) -> RepoResult<Vec<HeroSlide>> {
        self.base.find_ordered(TABLE, filter).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<HeroSlide>> {
        self.base.find(TABLE, id).await
    }

    /// Create a slide; `order` defaults to 0 and `active` to true
    pub async fn create(&self, data: HeroSlideInput) -> RepoResult<HeroSlide> {
        let slide = HeroSlide {
            id: None,
            title: data.title.trim().to_string(),
            content: data.content.trim().to_string(),
            image_url: data.image_url,
            image_public_id: data.image_public_id,
            logo: data.logo.unwrap_or_default(),
            cta: data.cta.trim().to_string(),
            location: data.location.unwrap_or_default(),
            date: data.date.unwrap_or_default(),
            has_location: data.has_location.unwrap_or(false),
            sort_order: data.order.unwrap_or(0),
            is_active: data.active.unwrap_or(true),
            created_at: now_millis(),
        };

        let created: Option<HeroSlide> = self.base.db().create(TABLE).content(slide).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create hero slide".to_string()))
    }

    /// Replace the payload of a slide
    ///
    /// `order` and `active` keep their stored values unless given explicitly.
    pub async fn update(&self, id: &str, data: HeroSlideInput) -> RepoResult<Replaced<HeroSlide>> {
        let previous = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Hero slide {} not found", id)))?;

        let slide = HeroSlide {
            id: None,
            title: data.title.trim().to_string(),
            content: data.content.trim().to_string(),
            image_url: data.image_url,
            image_public_id: data.image_public_id,
            logo: data.logo.unwrap_or_default(),
            cta: data.cta.trim().to_string(),
            location: data.location.unwrap_or_default(),
            date: data.date.unwrap_or_default(),
            has_location: data.has_location.unwrap_or(false),
            sort_order: data.order.unwrap_or(previous.sort_order),
            is_active: data.active.unwrap_or(previous.is_active),
            created_at: previous.created_at,
        };

        let current = self.base.replace(TABLE, id, slide).await?;
        Ok(Replaced { previous, current })
    }

    /// Hard delete, returning the removed slide
    pub async fn delete(&self, id: &str) -> RepoResult<HeroSlide> {
        self.base
            .remove(TABLE, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Hero slide {} not found", id)))
    }
}

impl OrderedRepository for HeroSlideRepository {
    type Item = shared::models::HeroSlide;

    async fn find_sorted(&self, filter: ListFilter) -> RepoResult<Vec<Self::Item>> {
        let slides = self.find_all(filter).await?;
        Ok(slides.into_iter().map(Into::into).collect())
    }

    async fn update_order(&self, id: &str, order: i64) -> RepoResult<UpdateOutcome> {
        self.base.set_sort_order::<HeroSlide>(TABLE, id, order).await
    }
}

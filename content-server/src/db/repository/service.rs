//! Service Repository

use super::{BaseRepository, ListFilter, RepoError, RepoResult, Replaced, UpdateOutcome};
use crate::db::models::Service;
use crate::ordering::OrderedRepository;
use crate::utils::now_millis;
use shared::models::ServiceInput;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "service";

#[derive(Clone)]
pub struct ServiceRepository {
    base: BaseRepository,
}

impl ServiceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Services in display order
    pub async fn find_all(&self, filter: ListFilter) -> RepoResult<Vec<Service>> {
        self.base.find_ordered(TABLE, filter).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Service>> {
        self.base.find(TABLE, id).await
    }

    pub async fn create(&self, data: ServiceInput) -> RepoResult<Service> {
        let service = Service {
            id: None,
            title: data.title.trim().to_string(),
            description: data.description.trim().to_string(),
            image: data.image,
            image_public_id: data.image_public_id,
            icon: data.icon.unwrap_or_default(),
            icon_public_id: data.icon_public_id.unwrap_or_default(),
            page_path: data.page_path.unwrap_or_default(),
            slides: data.slides.unwrap_or_default(),
            overview: data.overview.unwrap_or_default(),
            overview_cards: data.overview_cards.unwrap_or_default(),
            key_features: data.key_features.unwrap_or_default(),
            benefits: data.benefits.unwrap_or_default(),
            sort_order: data.order.unwrap_or(0),
            is_active: data.active.unwrap_or(true),
            created_at: now_millis(),
        };

        let created: Option<Service> = self.base.db().create(TABLE).content(service).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create service".to_string()))
    }

    /// Replace the basic fields of a service
    ///
    /// Sections left out of the payload (icon, page path, slides, overview,
    /// cards, key features, benefits) keep their stored values.
    pub async fn update(&self, id: &str, data: ServiceInput) -> RepoResult<Replaced<Service>> {
        let previous = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Service {} not found", id)))?;

        let service = Service {
            id: None,
            title: data.title.trim().to_string(),
            description: data.description.trim().to_string(),
            image: data.image,
            image_public_id: data.image_public_id,
            icon: data.icon.unwrap_or_else(|| previous.icon.clone()),
            icon_public_id: data
                .icon_public_id
                .unwrap_or_else(|| previous.icon_public_id.clone()),
            page_path: data.page_path.unwrap_or_else(|| previous.page_path.clone()),
            slides: data.slides.unwrap_or_else(|| previous.slides.clone()),
            overview: data.overview.unwrap_or_else(|| previous.overview.clone()),
            overview_cards: data
                .overview_cards
                .unwrap_or_else(|| previous.overview_cards.clone()),
            key_features: data
                .key_features
                .unwrap_or_else(|| previous.key_features.clone()),
            benefits: data.benefits.unwrap_or_else(|| previous.benefits.clone()),
            sort_order: data.order.unwrap_or(previous.sort_order),
            is_active: data.active.unwrap_or(previous.is_active),
            created_at: previous.created_at,
        };

        let current = self.base.replace(TABLE, id, service).await?;
        Ok(Replaced { previous, current })
    }

    /// Hard delete, returning the removed service
    pub async fn delete(&self, id: &str) -> RepoResult<Service> {
        self.base
            .remove(TABLE, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Service {} not found", id)))
    }
}

impl OrderedRepository for ServiceRepository {
    type Item = shared::models::Service;

    async fn find_sorted(&self, filter: ListFilter) -> RepoResult<Vec<Self::Item>> {
        let services = self.find_all(filter).await?;
        Ok(services.into_iter().map(Into::into).collect())
    }

    async fn update_order(&self, id: &str, order: i64) -> RepoResult<UpdateOutcome> {
        self.base.set_sort_order::<Service>(TABLE, id, order).await
    }
}

//! Product Repository

use super::{
    BaseRepository, ListFilter, RepoError, RepoResult, Replaced, UpdateOutcome, record_id,
};
use crate::db::models::Product;
use crate::ordering::OrderedRepository;
use crate::utils::now_millis;
use shared::models::{PreviewItem, ProductInput, ShowcaseItem};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Products in display order
    pub async fn find_all(&self, filter: ListFilter) -> RepoResult<Vec<Product>> {
        self.base.find_ordered(TABLE, filter).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        self.base.find(TABLE, id).await
    }

    /// Find product by page path
    pub async fn find_by_page_path(&self, page_path: &str) -> RepoResult<Option<Product>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM product WHERE page_path = $page_path LIMIT 1")
            .bind(("page_path", page_path.to_string()))
            .await?;
        let products: Vec<Product> = result.take(0)?;
        Ok(products.into_iter().next())
    }

    pub async fn create(&self, data: ProductInput) -> RepoResult<Product> {
        let page_path = data.page_path.trim().to_string();
        if self.find_by_page_path(&page_path).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Page path '{}' already exists",
                page_path
            )));
        }

        let product = Product {
            id: None,
            title: data.title.trim().to_string(),
            page_path,
            description: data.description.trim().to_string(),
            hero_image: data.hero_image.unwrap_or_default(),
            audio: data.audio.unwrap_or_default(),
            cta: data.cta.unwrap_or_default(),
            features: data.features.unwrap_or_default(),
            preview_items: data.preview_items.unwrap_or_default(),
            showcase_items: data.showcase_items.unwrap_or_default(),
            sort_order: data.order.unwrap_or(0),
            is_active: data.active.unwrap_or(true),
            created_at: now_millis(),
        };

        let created: Option<Product> = self.base.db().create(TABLE).content(product).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Replace the payload of a product
    ///
    /// Omitted optional fields (audio, cta, features, preview and showcase
    /// items, `order`, `active`) keep their stored values.
    pub async fn update(&self, id: &str, data: ProductInput) -> RepoResult<Replaced<Product>> {
        let previous = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))?;

        let page_path = data.page_path.trim().to_string();
        if page_path != previous.page_path
            && let Some(other) = self.find_by_page_path(&page_path).await?
            && other.id != previous.id
        {
            return Err(RepoError::Duplicate(format!(
                "Page path '{}' already exists",
                page_path
            )));
        }

        let product = Product {
            id: None,
            title: data.title.trim().to_string(),
            page_path,
            description: data.description.trim().to_string(),
            hero_image: data.hero_image.unwrap_or_default(),
            audio: data.audio.unwrap_or_else(|| previous.audio.clone()),
            cta: data.cta.unwrap_or_else(|| previous.cta.clone()),
            features: data.features.unwrap_or_else(|| previous.features.clone()),
            preview_items: data
                .preview_items
                .unwrap_or_else(|| previous.preview_items.clone()),
            showcase_items: data
                .showcase_items
                .unwrap_or_else(|| previous.showcase_items.clone()),
            sort_order: data.order.unwrap_or(previous.sort_order),
            is_active: data.active.unwrap_or(previous.is_active),
            created_at: previous.created_at,
        };

        let current = self.base.replace(TABLE, id, product).await?;
        Ok(Replaced { previous, current })
    }

    /// Append one preview item
    pub async fn add_preview_item(&self, id: &str, item: PreviewItem) -> RepoResult<Product> {
        self.append(id, "preview_items", item).await
    }

    /// Append one showcase item
    pub async fn add_showcase_item(&self, id: &str, item: ShowcaseItem) -> RepoResult<Product> {
        self.append(id, "showcase_items", item).await
    }

    async fn append<T>(&self, id: &str, field: &'static str, item: T) -> RepoResult<Product>
    where
        T: serde::Serialize + 'static,
    {
        let thing = record_id(TABLE, id)?;
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }

        let sql = format!(
            "UPDATE $thing SET {field} = array::append({field} ?? [], $item) RETURN AFTER"
        );
        let mut result = self
            .base
            .db()
            .query(sql)
            .bind(("thing", thing))
            .bind(("item", item))
            .await?;
        result
            .take::<Option<Product>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete, returning the removed product
    pub async fn delete(&self, id: &str) -> RepoResult<Product> {
        self.base
            .remove(TABLE, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }
}

impl OrderedRepository for ProductRepository {
    type Item = shared::models::Product;

    async fn find_sorted(&self, filter: ListFilter) -> RepoResult<Vec<Self::Item>> {
        let products = self.find_all(filter).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    async fn update_order(&self, id: &str, order: i64) -> RepoResult<UpdateOutcome> {
        self.base.set_sort_order::<Product>(TABLE, id, order).await
    }
}

//! Product Model

use serde::{Deserialize, Serialize};
use shared::models::{MediaAsset, PreviewItem, ProductCta, ShowcaseItem};
use surrealdb::RecordId;

use super::{default_true, id_string};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub page_path: String,
    pub description: String,
    pub hero_image: MediaAsset,
    #[serde(default)]
    pub audio: MediaAsset,
    #[serde(default)]
    pub cta: ProductCta,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub preview_items: Vec<PreviewItem>,
    #[serde(default)]
    pub showcase_items: Vec<ShowcaseItem>,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: i64,
}

impl Product {
    /// Every hosted asset referenced by this product
    pub fn media_assets(&self) -> Vec<MediaAsset> {
        let mut assets = vec![self.hero_image.clone(), self.audio.clone()];
        for item in &self.preview_items {
            assets.push(item.desktop.clone());
            assets.push(item.mobile.clone());
        }
        for item in &self.showcase_items {
            assets.push(item.desktop.clone());
            assets.push(item.mobile.clone());
        }
        assets
    }
}

impl From<Product> for shared::models::Product {
    fn from(p: Product) -> Self {
        Self {
            id: id_string(&p.id),
            title: p.title,
            page_path: p.page_path,
            description: p.description,
            hero_image: p.hero_image,
            audio: p.audio,
            cta: p.cta,
            features: p.features,
            preview_items: p.preview_items,
            showcase_items: p.showcase_items,
            order: p.sort_order,
            active: p.is_active,
            created_at: p.created_at,
        }
    }
}

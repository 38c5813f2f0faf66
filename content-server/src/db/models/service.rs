//! Service Model

use serde::{Deserialize, Serialize};
use shared::models::{KeyFeature, MediaAsset, OverviewCard, ServiceOverview, ServiceSlide};
use surrealdb::RecordId;

use super::{default_true, id_string};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_public_id: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub icon_public_id: String,
    #[serde(default)]
    pub page_path: String,
    #[serde(default)]
    pub slides: Vec<ServiceSlide>,
    #[serde(default)]
    pub overview: ServiceOverview,
    #[serde(default)]
    pub overview_cards: Vec<OverviewCard>,
    #[serde(default)]
    pub key_features: Vec<KeyFeature>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: i64,
}

impl Service {
    /// Every hosted asset referenced by this service
    pub fn media_assets(&self) -> Vec<MediaAsset> {
        let mut assets = vec![
            MediaAsset::new(self.image.clone(), self.image_public_id.clone()),
            MediaAsset::new(self.icon.clone(), self.icon_public_id.clone()),
        ];
        for slide in &self.slides {
            assets.push(slide.image.clone());
            assets.push(slide.icon.clone());
        }
        assets.extend(self.overview_cards.iter().map(|card| card.image.clone()));
        assets
    }
}

impl From<Service> for shared::models::Service {
    fn from(s: Service) -> Self {
        Self {
            id: id_string(&s.id),
            title: s.title,
            description: s.description,
            image: s.image,
            image_public_id: s.image_public_id,
            icon: s.icon,
            icon_public_id: s.icon_public_id,
            page_path: s.page_path,
            slides: s.slides,
            overview: s.overview,
            overview_cards: s.overview_cards,
            key_features: s.key_features,
            benefits: s.benefits,
            order: s.sort_order,
            active: s.is_active,
            created_at: s.created_at,
        }
    }
}

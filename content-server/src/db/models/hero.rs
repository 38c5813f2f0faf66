//! Hero Slide Model

use serde::{Deserialize, Serialize};
use shared::models::MediaAsset;
use surrealdb::RecordId;

use super::{default_true, id_string};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub image_public_id: String,
    #[serde(default)]
    pub logo: String,
    pub cta: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub has_location: bool,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: i64,
}

impl HeroSlide {
    /// Hosted image of this document
    pub fn media_assets(&self) -> Vec<MediaAsset> {
        vec![MediaAsset::new(self.image_url.clone(), self.image_public_id.clone())]
    }
}

impl From<HeroSlide> for shared::models::HeroSlide {
    fn from(s: HeroSlide) -> Self {
        Self {
            id: id_string(&s.id),
            title: s.title,
            content: s.content,
            image_url: s.image_url,
            image_public_id: s.image_public_id,
            logo: s.logo,
            cta: s.cta,
            location: s.location,
            date: s.date,
            has_location: s.has_location,
            order: s.sort_order,
            active: s.is_active,
            created_at: s.created_at,
        }
    }
}

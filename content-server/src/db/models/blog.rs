//! Blog Model

use serde::{Deserialize, Serialize};
use shared::models::MediaAsset;
use surrealdb::RecordId;

use super::id_string;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    pub image_url: String,
    pub image_public_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date: i64,
    #[serde(default)]
    pub created_at: i64,
}

pub fn default_author() -> String {
    "Admin".to_string()
}

impl Blog {
    /// Hosted image of this document
    pub fn media_assets(&self) -> Vec<MediaAsset> {
        vec![MediaAsset::new(self.image_url.clone(), self.image_public_id.clone())]
    }
}

impl From<Blog> for shared::models::Blog {
    fn from(b: Blog) -> Self {
        Self {
            id: id_string(&b.id),
            title: b.title,
            content: b.content,
            author: b.author,
            image_url: b.image_url,
            image_public_id: b.image_public_id,
            tags: b.tags,
            date: b.date,
            created_at: b.created_at,
        }
    }
}

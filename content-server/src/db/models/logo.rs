//! Logo Model

use serde::{Deserialize, Serialize};
use shared::models::MediaAsset;
use surrealdb::RecordId;

use super::id_string;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub image_public_id: String,
    #[serde(default = "default_alt_text")]
    pub alt_text: String,
    #[serde(default)]
    pub uploaded_at: i64,
}

pub fn default_alt_text() -> String {
    "Logo image".to_string()
}

/// Partial update; `None` fields are left untouched by `MERGE`
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogoChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl Logo {
    /// Hosted image of this document
    pub fn media_assets(&self) -> Vec<MediaAsset> {
        vec![MediaAsset::new(self.image_url.clone(), self.image_public_id.clone())]
    }
}

impl From<Logo> for shared::models::Logo {
    fn from(l: Logo) -> Self {
        Self {
            id: id_string(&l.id),
            name: l.name,
            image_url: l.image_url,
            image_public_id: l.image_public_id,
            alt_text: l.alt_text,
            uploaded_at: l.uploaded_at,
        }
    }
}

//! Hero Slide Model

use serde::{Deserialize, Serialize};

/// Homepage carousel slide
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    #[serde(rename = "_id")]
    pub id: String,
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
    pub order: i64,
    pub active: bool,
    /// Unix millis
    pub created_at: i64,
}

/// Create / update hero slide payload
///
/// Update replaces every payload field; `order` and `active` keep their
/// stored values when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlideInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_public_id: String,
    pub logo: Option<String>,
    #[serde(default)]
    pub cta: String,
    pub location: Option<String>,
    pub date: Option<String>,
    pub has_location: Option<bool>,
    pub order: Option<i64>,
    pub active: Option<bool>,
}

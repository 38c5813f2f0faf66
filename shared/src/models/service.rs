//! Service Model

use serde::{Deserialize, Serialize};

use super::media::MediaAsset;

/// Slide in a service page's own carousel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSlide {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: MediaAsset,
    #[serde(default)]
    pub icon: MediaAsset,
    #[serde(default = "default_slide_cta")]
    pub cta: String,
    #[serde(default)]
    pub has_location: bool,
}

fn default_slide_cta() -> String {
    "Get Started".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOverview {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub items: Vec<OverviewItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: MediaAsset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFeature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Service entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
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
    pub order: i64,
    pub active: bool,
    pub created_at: i64,
}

/// Create / update service payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_public_id: String,
    pub icon: Option<String>,
    pub icon_public_id: Option<String>,
    pub page_path: Option<String>,
    pub slides: Option<Vec<ServiceSlide>>,
    pub overview: Option<ServiceOverview>,
    pub overview_cards: Option<Vec<OverviewCard>>,
    pub key_features: Option<Vec<KeyFeature>>,
    pub benefits: Option<Vec<String>>,
    pub order: Option<i64>,
    pub active: Option<bool>,
}

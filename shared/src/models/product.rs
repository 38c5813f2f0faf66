//! Product Model

use serde::{Deserialize, Serialize};

use super::media::MediaAsset;

/// Product call-to-action labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCta {
    #[serde(default = "default_cta_text")]
    pub text: String,
    #[serde(default = "default_cta_secondary")]
    pub secondary_text: String,
}

fn default_cta_text() -> String {
    "Get Started".to_string()
}

fn default_cta_secondary() -> String {
    "View Demo".to_string()
}

impl Default for ProductCta {
    fn default() -> Self {
        Self {
            text: default_cta_text(),
            secondary_text: default_cta_secondary(),
        }
    }
}

/// Live preview entry (desktop + optional mobile screenshot)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desktop: MediaAsset,
    #[serde(default)]
    pub mobile: MediaAsset,
}

/// Zig-zag showcase entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub desktop: MediaAsset,
    #[serde(default)]
    pub mobile: MediaAsset,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
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
    pub order: i64,
    pub active: bool,
    pub created_at: i64,
}

/// Create / update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub page_path: String,
    #[serde(default)]
    pub description: String,
    pub hero_image: Option<MediaAsset>,
    pub audio: Option<MediaAsset>,
    pub cta: Option<ProductCta>,
    pub features: Option<Vec<String>>,
    pub preview_items: Option<Vec<PreviewItem>>,
    pub showcase_items: Option<Vec<ShowcaseItem>>,
    pub order: Option<i64>,
    pub active: Option<bool>,
}

//! Logo Model

use serde::{Deserialize, Serialize};

/// Partner / client logo
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub image_public_id: String,
    pub alt_text: String,
    pub uploaded_at: i64,
}

/// Create logo payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    pub image_public_id: Option<String>,
    pub alt_text: Option<String>,
}

/// Update logo payload (only provided, non-empty fields change)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoUpdate {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
    pub alt_text: Option<String>,
}

//! Blog Model

use serde::{Deserialize, Serialize};

/// Blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: String,
    pub image_public_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Publication date (Unix millis)
    pub date: i64,
    pub created_at: i64,
}

/// Create / update blog payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub author: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_public_id: String,
    pub tags: Option<Vec<String>>,
    pub date: Option<i64>,
}

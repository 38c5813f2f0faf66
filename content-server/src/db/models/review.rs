//! Review Model

use serde::{Deserialize, Serialize};
use shared::models::ReviewStatus;
use surrealdb::RecordId;

use super::id_string;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub reviewer_name: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_or_service_id: Option<String>,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub created_at: i64,
}

/// Moderation changes; `None` fields are left untouched by `MERGE`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl ReviewChanges {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.comment.is_none() && self.rating.is_none()
    }
}

impl From<Review> for shared::models::Review {
    fn from(r: Review) -> Self {
        Self {
            id: id_string(&r.id),
            reviewer_name: r.reviewer_name,
            rating: r.rating,
            comment: r.comment,
            product_or_service_id: r.product_or_service_id,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

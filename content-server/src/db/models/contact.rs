//! Contact Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::id_string;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
    #[serde(default)]
    pub received_at: i64,
    #[serde(default)]
    pub is_read: bool,
}

impl From<Contact> for shared::models::Contact {
    fn from(c: Contact) -> Self {
        Self {
            id: id_string(&c.id),
            name: c.name,
            email: c.email,
            phone: c.phone,
            service: c.service,
            message: c.message,
            received_at: c.received_at,
            is_read: c.is_read,
        }
    }
}

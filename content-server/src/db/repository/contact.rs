//! Contact Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Contact;
use crate::utils::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "contact";

#[derive(Clone)]
pub struct ContactRepository {
    base: BaseRepository,
}

impl ContactRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All submissions, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Contact>> {
        let contacts: Vec<Contact> = self
            .base
            .db()
            .query("SELECT * FROM contact ORDER BY received_at DESC")
            .await?
            .take(0)?;
        Ok(contacts)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Contact>> {
        self.base.find(TABLE, id).await
    }

    /// Store a submission as unread
    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        service: Option<String>,
        message: String,
    ) -> RepoResult<Contact> {
        let contact = Contact {
            id: None,
            name,
            email,
            phone,
            service,
            message,
            received_at: now_millis(),
            is_read: false,
        };

        let created: Option<Contact> = self.base.db().create(TABLE).content(contact).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create contact".to_string()))
    }

    pub async fn set_read(&self, id: &str, is_read: bool) -> RepoResult<Contact> {
        let thing = record_id(TABLE, id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET is_read = $is_read RETURN AFTER")
            .bind(("thing", thing))
            .bind(("is_read", is_read))
            .await?;
        result
            .take::<Option<Contact>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Contact {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Contact> {
        self.base
            .remove(TABLE, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Contact {} not found", id)))
    }
}

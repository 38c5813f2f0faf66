//! User Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::User;
use crate::utils::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "user";

/// Fields of a new account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        self.base.find(TABLE, id).await
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE username = $username LIMIT 1")
            .bind(("username", username.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create an account with an Argon2-hashed password
    pub async fn create(&self, data: NewUser) -> RepoResult<User> {
        if self.find_by_username(&data.username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Username '{}' already exists",
                data.username
            )));
        }

        let password_hash = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let user = User {
            id: None,
            username: data.username,
            email: data.email,
            password_hash,
            is_admin: data.is_admin,
            created_at: now_millis(),
        };

        let created: Option<User> = self.base.db().create(TABLE).content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Make sure the bootstrap admin exists and carries the admin flag
    ///
    /// Returns `true` when the account was created. An existing password is
    /// never overwritten.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> RepoResult<bool> {
        match self.find_by_username(username).await? {
            Some(user) if user.is_admin => Ok(false),
            Some(user) => {
                let thing = user
                    .id
                    .ok_or_else(|| RepoError::Database("User record without id".to_string()))?;
                self.base
                    .db()
                    .query("UPDATE $thing SET is_admin = true")
                    .bind(("thing", thing))
                    .await?
                    .check()?;
                Ok(false)
            }
            None => {
                self.create(NewUser {
                    username: username.to_string(),
                    email: String::new(),
                    password: password.to_string(),
                    is_admin: true,
                })
                .await?;
                Ok(true)
            }
        }
    }
}

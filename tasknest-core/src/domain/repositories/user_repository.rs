//! User repository for data access
//!
//! Each user file holds a JSON array of users keyed by the owning user's id.
//! Files are written owner-only since they carry password credentials.

use crate::domain::entities::User;
use crate::infrastructure::config::StorageConfig;
use crate::infrastructure::storage::JsonFileStore;
use crate::shared::types::UserId;
use crate::shared::TaskNestResult;
use async_trait::async_trait;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Load the user file for `user_id`; empty if missing or unreadable
    async fn load_user(&self, user_id: UserId) -> Vec<User>;

    /// Write the user file for `user_id`
    async fn save_user(&self, users: &[User], user_id: UserId) -> TaskNestResult<()>;

    /// Remove the user file. Deleting a missing user is not an error.
    async fn delete_user(&self, user_id: UserId) -> TaskNestResult<()>;

    /// Check whether a user file exists
    async fn exists(&self, user_id: UserId) -> bool;
}

/// JSON-file user repository
#[derive(Debug, Clone)]
pub struct JsonUserRepository {
    config: StorageConfig,
}

impl JsonUserRepository {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    fn store(&self, user_id: UserId) -> JsonFileStore<User> {
        JsonFileStore::new(self.config.user_file(user_id)).private()
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn load_user(&self, user_id: UserId) -> Vec<User> {
        self.store(user_id).load_all().await
    }

    async fn save_user(&self, users: &[User], user_id: UserId) -> TaskNestResult<()> {
        self.store(user_id).save_all(users).await
    }

    async fn delete_user(&self, user_id: UserId) -> TaskNestResult<()> {
        if self.store(user_id).delete().await? {
            log::info!("Deleted user file for {}", user_id);
        }
        Ok(())
    }

    async fn exists(&self, user_id: UserId) -> bool {
        self.store(user_id).exists().await
    }
}

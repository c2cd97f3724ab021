//! Task repository for data access
//!
//! Tasks live either in the shared task list or in one file per user.

use crate::domain::entities::Task;
use crate::infrastructure::config::StorageConfig;
use crate::infrastructure::storage::JsonFileStore;
use crate::shared::types::UserId;
use crate::shared::TaskNestResult;
use async_trait::async_trait;

/// Task repository trait
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Load the shared task list; empty if missing or unreadable
    async fn load_all(&self) -> Vec<Task>;

    /// Replace the shared task list
    async fn save_all(&self, tasks: &[Task]) -> TaskNestResult<()>;

    /// Load one user's tasks; empty if missing or unreadable
    async fn load_for_user(&self, user_id: UserId) -> Vec<Task>;

    /// Replace one user's tasks
    async fn save_for_user(&self, user_id: UserId, tasks: &[Task]) -> TaskNestResult<()>;

    /// Remove one user's task file
    async fn delete_for_user(&self, user_id: UserId) -> TaskNestResult<()>;
}

/// JSON-file task repository
#[derive(Debug, Clone)]
pub struct JsonTaskRepository {
    config: StorageConfig,
}

impl JsonTaskRepository {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    fn shared_store(&self) -> JsonFileStore<Task> {
        JsonFileStore::new(self.config.tasks_file())
    }

    fn user_store(&self, user_id: UserId) -> JsonFileStore<Task> {
        JsonFileStore::new(self.config.user_tasks_file(user_id))
    }
}

#[async_trait]
impl TaskRepository for JsonTaskRepository {
    async fn load_all(&self) -> Vec<Task> {
        self.shared_store().load_all().await
    }

    async fn save_all(&self, tasks: &[Task]) -> TaskNestResult<()> {
        self.shared_store().save_all(tasks).await
    }

    async fn load_for_user(&self, user_id: UserId) -> Vec<Task> {
        self.user_store(user_id).load_all().await
    }

    async fn save_for_user(&self, user_id: UserId, tasks: &[Task]) -> TaskNestResult<()> {
        self.user_store(user_id).save_all(tasks).await
    }

    async fn delete_for_user(&self, user_id: UserId) -> TaskNestResult<()> {
        self.user_store(user_id).delete().await?;
        Ok(())
    }
}

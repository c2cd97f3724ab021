//! TaskNest Core
//!
//! Todo records persisted as JSON files, with salted password credentials for
//! the accounts that own them.
//!
//! ## Architecture
//!
//! - **Core**: salted SHA-256 credential hashing, session tokens, entropy
//! - **Domain**: `Task` and `User` records and their repositories
//! - **Infrastructure**: configuration and the JSON file store
//! - **Shared**: common types, constants, errors and utilities
//!
//! ## Usage
//!
//! ```no_run
//! use tasknest_core::{init_tasknest_core, Task};
//!
//! # async fn run() -> Result<(), tasknest_core::TaskNestError> {
//! let core = init_tasknest_core().await?;
//!
//! let user = core.register_user("alice", "mySecurePassword123").await?;
//! let token = core.login(user.id(), "alice", "mySecurePassword123").await?;
//! assert!(token.is_some());
//!
//! core.add_task(user.id(), "alice", Task::titled("Write the report")).await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use crate::infrastructure::config::StorageConfig;
use crate::shared::constants::{DIGEST_SIZE, SALT_SIZE};
use crate::shared::types::UserId;
use crate::shared::utils::validate_username;
use crate::shared::TaskNestResult;

// Re-export specific components
pub use crate::core::crypto::{Credential, CredentialHasher, EntropySource, OsEntropy, SessionToken};
pub use crate::domain::{JsonTaskRepository, JsonUserRepository, Task, TaskRepository, User, UserRepository};
pub use crate::infrastructure::StorageConfig as Config;
pub use crate::shared::error::TaskNestError;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize logging. `RUST_LOG` overrides the default `info` filter.
pub fn init() -> Result<(), TaskNestError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .map_err(|e| TaskNestError::config(format!("Logger already initialized: {}", e)))
}

/// Initialize the TaskNest core with configuration from .env or safe defaults
pub async fn init_tasknest_core() -> Result<TaskNestCore, TaskNestError> {
    let config = StorageConfig::from_env();
    log::info!("Using data directory {}", config.data_dir().display());
    Ok(TaskNestCore::new(config))
}

/// Main TaskNest struct tying credentials to persisted users and tasks
pub struct TaskNestCore {
    hasher: CredentialHasher,
    users: Box<dyn UserRepository>,
    tasks: Box<dyn TaskRepository>,
}

impl TaskNestCore {
    /// JSON repositories rooted at `config`, OS entropy
    pub fn new(config: StorageConfig) -> Self {
        Self::with_parts(
            CredentialHasher::new_default(),
            Box::new(JsonUserRepository::new(config.clone())),
            Box::new(JsonTaskRepository::new(config)),
        )
    }

    pub fn with_parts(
        hasher: CredentialHasher,
        users: Box<dyn UserRepository>,
        tasks: Box<dyn TaskRepository>,
    ) -> Self {
        Self { hasher, users, tasks }
    }

    pub fn hasher(&self) -> &CredentialHasher {
        &self.hasher
    }

    /// Create and persist a new account
    pub async fn register_user(&self, username: &str, password: &str) -> Result<User, TaskNestError> {
        validate_username(username)?;
        let user = User::register(username.trim(), password, &self.hasher)?;
        self.users.save_user(std::slice::from_ref(&user), user.id()).await?;
        log::info!("Registered user {}", user.id());
        Ok(user)
    }

    /// Check a password and hand out a fresh session token.
    /// Unknown users and wrong passwords both yield `None`.
    pub async fn login(&self, user_id: UserId, username: &str, password: &str) -> Result<Option<SessionToken>, TaskNestError> {
        let username = username.trim();
        let users = self.users.load_user(user_id).await;

        let verified = match users.iter().find(|u| u.username() == username) {
            Some(user) => user.verify_password(password, &self.hasher),
            None => {
                // keep the unknown-user path doing the same digest work
                let placeholder = Credential::new([0u8; SALT_SIZE], [0u8; DIGEST_SIZE]).encode();
                let _ = self.hasher.verify_password(password, &placeholder);
                false
            }
        };

        if !verified {
            log::info!("Login rejected for user {}", user_id);
            return Ok(None);
        }

        let token = self.hasher.generate_session_token()?;
        log::info!("Login accepted for user {}", user_id);
        Ok(Some(token))
    }

    /// Replace the credential after checking the current password
    pub async fn change_password(
        &self,
        user_id: UserId,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<bool, TaskNestError> {
        let username = username.trim();
        let mut users = self.users.load_user(user_id).await;
        let Some(user) = users.iter_mut().find(|u| u.username() == username) else {
            return Ok(false);
        };
        if !user.verify_password(current_password, &self.hasher) {
            return Ok(false);
        }

        user.set_password(self.hasher.hash_password(new_password)?);
        self.users.save_user(&users, user_id).await?;
        log::info!("Password changed for user {}", user_id);
        Ok(true)
    }

    /// Append a task to the user's queue and persist both task and user files.
    ///
    /// The task file is written first. If that fails the user file is left
    /// untouched and still matches what was loaded.
    pub async fn add_task(&self, user_id: UserId, username: &str, task: Task) -> TaskNestResult<User> {
        let username = username.trim();
        let mut users = self.users.load_user(user_id).await;
        let user = users
            .iter_mut()
            .find(|u| u.username() == username)
            .ok_or_else(|| TaskNestError::user_not_found(format!("{} ({})", username, user_id)))?;

        user.add_task(task);
        let updated = user.clone();
        let owned: Vec<Task> = updated.tasks().iter().cloned().collect();

        self.tasks.save_for_user(user_id, &owned).await?;
        self.users.save_user(&users, user_id).await?;
        Ok(updated)
    }

    /// Tasks saved for `user_id`
    pub async fn tasks_for(&self, user_id: UserId) -> Vec<Task> {
        self.tasks.load_for_user(user_id).await
    }

    /// Remove the user file and the user's task file
    pub async fn delete_user(&self, user_id: UserId) -> TaskNestResult<()> {
        self.users.delete_user(user_id).await?;
        self.tasks.delete_for_user(user_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::STATUS_IN_PROGRESS;
    use async_trait::async_trait;
    use tempfile::TempDir;

    /// Task repository whose per-user writes always fail
    struct ReadOnlyTasks(JsonTaskRepository);

    #[async_trait]
    impl TaskRepository for ReadOnlyTasks {
        async fn load_all(&self) -> Vec<Task> {
            self.0.load_all().await
        }

        async fn save_all(&self, tasks: &[Task]) -> TaskNestResult<()> {
            self.0.save_all(tasks).await
        }

        async fn load_for_user(&self, user_id: UserId) -> Vec<Task> {
            self.0.load_for_user(user_id).await
        }

        async fn save_for_user(&self, _user_id: UserId, _tasks: &[Task]) -> TaskNestResult<()> {
            Err(TaskNestError::storage("disk full"))
        }

        async fn delete_for_user(&self, user_id: UserId) -> TaskNestResult<()> {
            self.0.delete_for_user(user_id).await
        }
    }

    fn core() -> (TempDir, TaskNestCore) {
        let dir = tempfile::tempdir().unwrap();
        let core = TaskNestCore::new(StorageConfig::new(dir.path()));
        (dir, core)
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let (_dir, core) = core();
        let user = core.register_user("username", "mySecurePassword123").await.unwrap();

        let token = core.login(user.id(), "username", "mySecurePassword123").await.unwrap();
        assert!(token.is_some());

        let rejected = core.login(user.id(), "username", "wrongPassword").await.unwrap();
        assert!(rejected.is_none());
    }

    #[tokio::test]
    async fn test_login_tokens_differ_per_session() {
        let (_dir, core) = core();
        let user = core.register_user("gina", "pw").await.unwrap();

        let first = core.login(user.id(), "gina", "pw").await.unwrap().unwrap();
        let second = core.login(user.id(), "gina", "pw").await.unwrap().unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_rejected() {
        let (_dir, core) = core();
        let user = core.register_user("hank", "pw").await.unwrap();

        assert!(core.login(user.id(), "someone-else", "pw").await.unwrap().is_none());
        assert!(core.login(uuid::Uuid::new_v4(), "hank", "pw").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_rejects_bad_username() {
        let (_dir, core) = core();
        let result = core.register_user("   ", "pw").await;
        assert!(matches!(result, Err(TaskNestError::Validation(_))));
    }

    #[tokio::test]
    async fn test_change_password() {
        let (_dir, core) = core();
        let user = core.register_user("ivy", "old-password").await.unwrap();

        assert!(!core.change_password(user.id(), "ivy", "not-it", "new-password").await.unwrap());
        assert!(core.change_password(user.id(), "ivy", "old-password", "new-password").await.unwrap());

        assert!(core.login(user.id(), "ivy", "old-password").await.unwrap().is_none());
        assert!(core.login(user.id(), "ivy", "new-password").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_add_task_persists_user_and_task_files() {
        let (_dir, core) = core();
        let user = core.register_user("jack", "pw").await.unwrap();

        let mut task = Task::titled("Implement secure authentication");
        task.set_status(STATUS_IN_PROGRESS);
        task.set_tags(vec!["security".to_string(), "authentication".to_string()]);

        let updated = core.add_task(user.id(), "jack", task.clone()).await.unwrap();
        assert_eq!(updated.tasks().len(), 1);

        let saved = core.tasks_for(user.id()).await;
        assert_eq!(saved, vec![task]);

        // credential survives the rewrite of the user file
        assert!(core.login(user.id(), "jack", "pw").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_padded_username_is_normalised_everywhere() {
        let (_dir, core) = core();
        let user = core.register_user("  bob  ", "pw").await.unwrap();
        assert_eq!(user.username(), "bob");

        assert!(core.login(user.id(), "  bob  ", "pw").await.unwrap().is_some());
        assert!(core.login(user.id(), "bob", "pw").await.unwrap().is_some());

        let updated = core.add_task(user.id(), "  bob  ", Task::titled("t")).await.unwrap();
        assert_eq!(updated.tasks().len(), 1);

        assert!(core.change_password(user.id(), " bob", "pw", "pw2").await.unwrap());
        assert!(core.login(user.id(), "bob ", "pw2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_failed_task_write_leaves_user_file_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig::new(dir.path());
        let users = JsonUserRepository::new(config.clone());
        let core = TaskNestCore::with_parts(
            CredentialHasher::new_default(),
            Box::new(users.clone()),
            Box::new(ReadOnlyTasks(JsonTaskRepository::new(config))),
        );
        let user = core.register_user("lena", "pw").await.unwrap();

        let result = core.add_task(user.id(), "lena", Task::titled("t")).await;
        assert!(matches!(result, Err(TaskNestError::Storage(_))));

        let stored = users.load_user(user.id()).await;
        assert_eq!(stored.len(), 1);
        assert!(stored[0].tasks().is_empty());
        assert!(core.login(user.id(), "lena", "pw").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_add_task_for_unknown_user() {
        let (_dir, core) = core();
        let result = core.add_task(uuid::Uuid::new_v4(), "nobody", Task::titled("x")).await;
        assert!(matches!(result, Err(TaskNestError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_user_removes_credential() {
        let (_dir, core) = core();
        let user = core.register_user("kate", "pw").await.unwrap();
        core.add_task(user.id(), "kate", Task::titled("t")).await.unwrap();

        core.delete_user(user.id()).await.unwrap();

        assert!(core.login(user.id(), "kate", "pw").await.unwrap().is_none());
        assert!(core.tasks_for(user.id()).await.is_empty());
    }
}

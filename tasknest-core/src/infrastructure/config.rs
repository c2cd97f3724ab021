//! Storage configuration
//!
//! Resolved from `.env` and the process environment. `TASKNEST_DATA_DIR`
//! overrides the data root; otherwise the OS data directory is used.

use crate::shared::constants::{
    APP_DIR_NAME, DATA_DIR_ENV, FALLBACK_DATA_DIR, TASKS_FILE_NAME, USERS_DIR_NAME, USER_TASKS_DIR_NAME,
};
use crate::shared::types::UserId;
use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved on-disk layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_data_dir);
        Self { data_dir }
    }

    /// `<OS data dir>/tasknest`, or `./data` when the OS has none
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Shared task list
    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE_NAME)
    }

    pub fn users_dir(&self) -> PathBuf {
        self.data_dir.join(USERS_DIR_NAME)
    }

    pub fn user_file(&self, user_id: UserId) -> PathBuf {
        self.users_dir().join(format!("{}.json", user_id))
    }

    pub fn user_tasks_file(&self, user_id: UserId) -> PathBuf {
        self.data_dir
            .join(USER_TASKS_DIR_NAME)
            .join(format!("{}.json", user_id))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(Self::default_data_dir())
    }
}

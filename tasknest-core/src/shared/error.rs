//! Error handling for the TaskNest core
//!
//! This module defines the error types used throughout the TaskNest core.

use thiserror::Error;

/// TaskNest error type
#[derive(Error, Debug, Clone)]
pub enum TaskNestError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The digest or secure randomness source cannot be used in this environment.
    /// Callers must treat this as fatal.
    #[error("Hashing unavailable: {0}")]
    HashingUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("User not found: {0}")]
    UserNotFound(String),
}

impl TaskNestError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a hashing-unavailable error
    pub fn hashing_unavailable(message: impl Into<String>) -> Self {
        Self::HashingUnavailable(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a user not found error
    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::UserNotFound(message.into())
    }
}

// Standard library error conversions
impl From<std::io::Error> for TaskNestError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for TaskNestError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("JSON error: {}", err))
    }
}

impl From<rand_core::Error> for TaskNestError {
    fn from(err: rand_core::Error) -> Self {
        Self::hashing_unavailable(format!("Secure random source failed: {}", err))
    }
}

//! Utility functions for the TaskNest core
//!
//! This module contains common utility functions used throughout the TaskNest core.

use crate::shared::constants::{USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH};
use crate::shared::error::TaskNestError;
use crate::shared::types::{Timestamp, UserId};
use chrono::{Local, Timelike};

/// Generate a unique ID
pub fn generate_id() -> UserId {
    uuid::Uuid::new_v4()
}

/// Current local date-time, truncated to whole seconds
pub fn current_timestamp() -> Timestamp {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Validate a username before it is used for an account
pub fn validate_username(username: &str) -> Result<(), TaskNestError> {
    let trimmed = username.trim();

    if trimmed.chars().count() < USERNAME_MIN_LENGTH {
        return Err(TaskNestError::validation("Username cannot be empty"));
    }

    if trimmed.chars().count() > USERNAME_MAX_LENGTH {
        return Err(TaskNestError::validation(format!(
            "Username must be at most {} characters long",
            USERNAME_MAX_LENGTH
        )));
    }

    if trimmed.chars().any(|c| c.is_control()) {
        return Err(TaskNestError::validation("Username contains control characters"));
    }

    Ok(())
}

/// Shorten a secret-derived string for display without exposing all of it
pub fn abbreviate(value: &str, keep: usize) -> String {
    if value.chars().count() <= keep {
        return value.to_string();
    }
    let prefix: String = value.chars().take(keep).collect();
    format!("{}...", prefix)
}

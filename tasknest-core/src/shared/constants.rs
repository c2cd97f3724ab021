//! Constants for the TaskNest core
//!
//! This module contains all constants used throughout the TaskNest core.

// Credential constants
pub const SALT_SIZE: usize = 16; // 128 bits
pub const DIGEST_SIZE: usize = 32; // SHA-256
pub const CREDENTIAL_SIZE: usize = SALT_SIZE + DIGEST_SIZE;
pub const SESSION_TOKEN_SIZE: usize = 32; // 256 bits
pub const HASH_ALGORITHM: &str = "SHA-256";

// Account constants
pub const USERNAME_MAX_LENGTH: usize = 64;
pub const USERNAME_MIN_LENGTH: usize = 1;

// Task status values used by the bundled tooling
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_COMPLETED: &str = "completed";

// Storage constants
pub const DATA_DIR_ENV: &str = "TASKNEST_DATA_DIR";
pub const APP_DIR_NAME: &str = "tasknest";
pub const FALLBACK_DATA_DIR: &str = "./data";
pub const TASKS_FILE_NAME: &str = "tasks.json";
pub const USERS_DIR_NAME: &str = "users";
pub const USER_TASKS_DIR_NAME: &str = "tasks";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_layout() {
        assert_eq!(CREDENTIAL_SIZE, 48);
        assert_eq!(SESSION_TOKEN_SIZE, 32);
    }

    #[test]
    fn test_username_bounds() {
        assert!(USERNAME_MIN_LENGTH < USERNAME_MAX_LENGTH);
    }
}

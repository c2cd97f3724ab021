//! Hashing functionality for the TaskNest core
//!
//! This module handles the SHA-256 digest used by password credentials.

pub mod hash_manager;

// Re-export all public items from submodules
pub use hash_manager::*;

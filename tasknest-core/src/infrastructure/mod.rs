//! Infrastructure layer - configuration and file storage
//!
//! This module contains the environment-driven configuration and the JSON
//! file store backing the repositories.

pub mod config;
pub mod storage;

// Re-export infrastructure components
pub use config::*;
pub use storage::*;

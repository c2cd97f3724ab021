//! Domain repositories
//!
//! This module contains repository traits for data access and their
//! JSON-file implementations.

pub mod task_repository;
pub mod user_repository;

// Re-export repositories
pub use task_repository::*;
pub use user_repository::*;

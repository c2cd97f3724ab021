//! Domain entities
//!
//! This module contains the record types persisted by the TaskNest core.

pub mod task;
pub mod user;

// Re-export entities
pub use task::*;
pub use user::*;

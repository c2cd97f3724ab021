//! Domain layer - entities and repositories
//!
//! This module contains the todo records and the repository traits used to
//! persist them.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;

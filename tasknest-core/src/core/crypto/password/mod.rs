//! Password management for the TaskNest core
//!
//! This module handles salted password hashing, verification, and session
//! token generation.

pub mod credential;
pub mod hasher_config;
pub mod password_hasher;
pub mod session_token;

// Re-export all public items from submodules
pub use credential::*;
pub use hasher_config::*;
pub use password_hasher::*;
pub use session_token::*;

//! Cryptographic functionality for the TaskNest core
//!
//! This module provides the digest helper, the injected randomness source and
//! the salted password credential hasher.

pub mod hashing;
pub mod password;
pub mod random;

// Re-export all public items from submodules
pub use hashing::*;
pub use password::*;
pub use random::*;

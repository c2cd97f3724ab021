//! File-backed storage
//!
//! Records are kept as JSON arrays, one file per entity group.

pub mod json_file_store;

pub use json_file_store::*;

//! Core TaskNest functionality
//!
//! This module contains the cryptographic building blocks used by the
//! account flow.

pub mod crypto;

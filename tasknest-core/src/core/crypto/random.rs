//! Secure randomness capability
//!
//! The credential hasher never reaches for a global generator. It owns an
//! [`EntropySource`], so production code uses the operating system CSPRNG and
//! tests can substitute a deterministic or failing source.

use crate::shared::TaskNestResult;
use rand_core::{OsRng, RngCore};

/// Source of cryptographically secure random bytes
#[cfg_attr(test, mockall::automock)]
pub trait EntropySource: Send + Sync {
    /// Fill `dest` entirely with random bytes
    fn fill(&self, dest: &mut [u8]) -> TaskNestResult<()>;
}

/// Operating system CSPRNG. Stateless, safe to share between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> TaskNestResult<()> {
        let mut rng = OsRng;
        rng.try_fill_bytes(dest)?;
        Ok(())
    }
}

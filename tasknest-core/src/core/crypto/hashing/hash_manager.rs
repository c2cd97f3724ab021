use crate::shared::constants::DIGEST_SIZE;
use sha2::{Digest, Sha256};

/// Hash manager
#[derive(Debug, Default, Clone, Copy)]
pub struct HashManager;

impl HashManager {
    pub fn new() -> Self {
        Self
    }

    /// Hash data with SHA256
    pub fn sha256(&self, data: &[u8]) -> [u8; DIGEST_SIZE] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    /// SHA256 over `salt || data`, without materialising the concatenation
    pub fn salted_sha256(&self, salt: &[u8], data: &[u8]) -> [u8; DIGEST_SIZE] {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(data);
        hasher.finalize().into()
    }

    /// Hash to hex string
    pub fn hash_to_hex(&self, data: &[u8]) -> String {
        hex::encode(self.sha256(data))
    }
}

/// Compare two byte slices in time independent of where they differ.
/// Slices of different length compare unequal immediately.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

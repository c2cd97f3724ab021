use crate::shared::constants::{DIGEST_SIZE, HASH_ALGORITHM, SALT_SIZE, SESSION_TOKEN_SIZE};

/// Credential hashing parameters.
///
/// The stored format is fixed, so these only describe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherConfig {
    pub algorithm: &'static str,
    pub salt_length: usize,
    pub digest_length: usize,
    pub token_length: usize,
}

impl HasherConfig {
    /// Decoded length of a stored credential
    pub fn credential_length(&self) -> usize {
        self.salt_length + self.digest_length
    }
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            algorithm: HASH_ALGORITHM,
            salt_length: SALT_SIZE,
            digest_length: DIGEST_SIZE,
            token_length: SESSION_TOKEN_SIZE,
        }
    }
}

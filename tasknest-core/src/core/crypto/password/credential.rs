//! Stored password credential
//!
//! Binary layout is `salt (16 bytes) || SHA-256(salt || plaintext) (32 bytes)`,
//! carried as standard padded base64 with no line breaks.

use crate::core::crypto::hashing::{constant_time_eq, HashManager};
use crate::shared::constants::{CREDENTIAL_SIZE, DIGEST_SIZE, SALT_SIZE};
use crate::shared::types::EncodedCredential;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// Salt and digest of a hashed password. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    salt: [u8; SALT_SIZE],
    digest: [u8; DIGEST_SIZE],
}

impl Credential {
    pub fn new(salt: [u8; SALT_SIZE], digest: [u8; DIGEST_SIZE]) -> Self {
        Self { salt, digest }
    }

    /// Build the credential for `plaintext` under a given salt
    pub fn derive(salt: [u8; SALT_SIZE], plaintext: &str) -> Self {
        let digest = HashManager::new().salted_sha256(&salt, plaintext.as_bytes());
        Self { salt, digest }
    }

    pub fn salt(&self) -> &[u8; SALT_SIZE] {
        &self.salt
    }

    pub fn digest(&self) -> &[u8; DIGEST_SIZE] {
        &self.digest
    }

    /// Raw `salt || digest` bytes
    pub fn to_bytes(&self) -> Zeroizing<[u8; CREDENTIAL_SIZE]> {
        let mut bytes = Zeroizing::new([0u8; CREDENTIAL_SIZE]);
        bytes[..SALT_SIZE].copy_from_slice(&self.salt);
        bytes[SALT_SIZE..].copy_from_slice(&self.digest);
        bytes
    }

    /// Parse raw bytes. Anything other than exactly 48 bytes is malformed.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != CREDENTIAL_SIZE {
            return None;
        }
        let (salt_bytes, digest_bytes) = bytes.split_at(SALT_SIZE);
        let mut salt = [0u8; SALT_SIZE];
        let mut digest = [0u8; DIGEST_SIZE];
        salt.copy_from_slice(salt_bytes);
        digest.copy_from_slice(digest_bytes);
        Some(Self { salt, digest })
    }

    /// Text form for storage
    pub fn encode(&self) -> EncodedCredential {
        STANDARD.encode(self.to_bytes().as_slice())
    }

    /// Parse the text form. Returns `None` on bad base64 or wrong length.
    pub fn decode(encoded: &str) -> Option<Self> {
        let bytes = Zeroizing::new(STANDARD.decode(encoded.as_bytes()).ok()?);
        Self::from_bytes(&bytes)
    }

    /// Recompute the digest for `plaintext` with this salt and compare in constant time
    pub fn matches(&self, plaintext: &str) -> bool {
        let mut computed = HashManager::new().salted_sha256(&self.salt, plaintext.as_bytes());
        let result = constant_time_eq(&computed, &self.digest);
        computed.zeroize();
        result
    }
}

// Digest stays out of logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("salt", &hex::encode(self.salt))
            .field("digest", &"<redacted>")
            .finish()
    }
}

impl Drop for Credential {
    fn drop(&mut self) {
        self.salt.zeroize();
        self.digest.zeroize();
    }
}

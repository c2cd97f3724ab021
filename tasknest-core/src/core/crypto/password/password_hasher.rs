use super::{Credential, HasherConfig, SessionToken};
use crate::core::crypto::random::{EntropySource, OsEntropy};
use crate::shared::constants::{SALT_SIZE, SESSION_TOKEN_SIZE};
use crate::shared::types::EncodedCredential;
use crate::shared::TaskNestResult;
use zeroize::Zeroizing;

/// Salted SHA-256 password hasher.
///
/// Every call to [`hash_password`](Self::hash_password) draws a fresh salt from
/// the owned entropy source, so equal plaintexts never share a credential.
/// Verification needs no randomness and never fails: anything that does not
/// decode to a well-formed credential simply does not match.
pub struct CredentialHasher {
    config: HasherConfig,
    entropy: Box<dyn EntropySource>,
}

impl CredentialHasher {
    pub fn new(entropy: Box<dyn EntropySource>) -> Self {
        Self {
            config: HasherConfig::default(),
            entropy,
        }
    }

    /// Hasher backed by the operating system CSPRNG
    pub fn new_default() -> Self {
        Self::new(Box::new(OsEntropy::new()))
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Hash a password into a fresh credential
    pub fn hash_credential(&self, password: &str) -> TaskNestResult<Credential> {
        let salt = self.generate_salt()?;
        Ok(Credential::derive(salt, password))
    }

    /// Hash a password and return the storable text form
    pub fn hash_password(&self, password: &str) -> TaskNestResult<EncodedCredential> {
        let credential = self.hash_credential(password)?;
        log::debug!("Generated new password credential");
        Ok(credential.encode())
    }

    /// Verify a password against a stored credential
    pub fn verify_password(&self, password: &str, stored: &str) -> bool {
        match Credential::decode(stored) {
            Some(credential) => credential.matches(password),
            None => {
                log::debug!("Stored credential is malformed; treating as mismatch");
                false
            }
        }
    }

    /// Generate a secure random session token
    pub fn generate_session_token(&self) -> TaskNestResult<SessionToken> {
        let mut raw = Zeroizing::new([0u8; SESSION_TOKEN_SIZE]);
        self.entropy.fill(raw.as_mut_slice())?;
        Ok(SessionToken::from_bytes(&raw))
    }

    fn generate_salt(&self) -> TaskNestResult<[u8; SALT_SIZE]> {
        let mut salt = [0u8; SALT_SIZE];
        self.entropy.fill(&mut salt)?;
        Ok(salt)
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new_default()
    }
}

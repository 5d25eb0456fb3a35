//! SHA-256 digest newtype.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Error returned when a hex string is not a well-formed SHA-256 digest.
#[derive(Debug, Error)]
pub enum DigestParseError {
    #[error("digest must be 64 hex characters, got {0}")]
    BadLength(usize),

    #[error("digest is not valid hex: {0}")]
    BadHex(#[from] hex::FromHexError),
}

/// A 256-bit SHA-256 digest.
///
/// Serializes as lowercase hex, the format used for reference secrets in
/// deployment configuration. Comparison is exact byte equality; there is no
/// fuzzy or partial match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sha256Digest([u8; 32]);

impl Sha256Digest {
    /// Compute the digest of arbitrary data.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();
        let mut output = [0u8; 32];
        output.copy_from_slice(&result);
        Self(output)
    }

    /// Parse a digest from a 64-character hex string (either case).
    pub fn from_hex(s: &str) -> Result<Self, DigestParseError> {
        let trimmed = s.trim();
        if trimmed.len() != 64 {
            return Err(DigestParseError::BadLength(trimmed.len()));
        }
        let bytes = hex::decode(trimmed)?;
        let mut output = [0u8; 32];
        output.copy_from_slice(&bytes);
        Ok(Self(output))
    }

    /// Lowercase hex encoding of the digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Whether `candidate`'s digest matches this reference exactly.
    pub fn matches(&self, candidate: &str) -> bool {
        Self::compute(candidate.as_bytes()) == *self
    }
}

impl fmt::Debug for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha256Digest({})", self.to_hex())
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for Sha256Digest {
    type Error = DigestParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Sha256Digest> for String {
    fn from(digest: Sha256Digest) -> Self {
        digest.to_hex()
    }
}

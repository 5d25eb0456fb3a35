//! Deployment-supplied reference secrets and the recovery allow-list.
//!
//! Both are loaded once at process start and read-only afterwards, so
//! concurrent requests share them without locking.

use crate::RecoveryError;
use atrium_crypto::Sha256Digest;
use atrium_types::Email;
use std::collections::HashSet;

/// The fixed set of email addresses permitted to attempt recovery at all.
///
/// An email outside this set can never pass phase 1, regardless of any
/// correct secret.
#[derive(Clone, Debug, Default)]
pub struct Allowlist(HashSet<Email>);

impl Allowlist {
    pub fn new(emails: impl IntoIterator<Item = Email>) -> Self {
        Self(emails.into_iter().collect())
    }

    pub fn contains(&self, email: &Email) -> bool {
        self.0.contains(email)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The four reference digests the phases are checked against.
///
/// The values are independent: compromising one does not help forge another.
/// Any absent value means the deployment is not ready to serve the endpoint;
/// every request then fails with `server-misconfigured` before any secret
/// comparison.
#[derive(Clone, Debug, Default)]
pub struct SecretReferences {
    pub password1: Option<Sha256Digest>,
    pub password2: Option<Sha256Digest>,
    pub answer1: Option<Sha256Digest>,
    pub answer2: Option<Sha256Digest>,
}

/// A fully-populated view of [`SecretReferences`], produced per request by
/// [`SecretReferences::ready`]. Verifiers only ever see this type.
#[derive(Clone, Copy)]
pub(crate) struct ReadyReferences<'a> {
    pub password1: &'a Sha256Digest,
    pub password2: &'a Sha256Digest,
    pub answer1: &'a Sha256Digest,
    pub answer2: &'a Sha256Digest,
}

impl SecretReferences {
    /// Build a complete reference set (primarily for tests and seeding).
    pub fn complete(
        password1: Sha256Digest,
        password2: Sha256Digest,
        answer1: Sha256Digest,
        answer2: Sha256Digest,
    ) -> Self {
        Self {
            password1: Some(password1),
            password2: Some(password2),
            answer1: Some(answer1),
            answer2: Some(answer2),
        }
    }

    /// Whether all four references are present.
    pub fn is_complete(&self) -> bool {
        self.ready().is_ok()
    }

    pub(crate) fn ready(&self) -> Result<ReadyReferences<'_>, RecoveryError> {
        Ok(ReadyReferences {
            password1: self
                .password1
                .as_ref()
                .ok_or(RecoveryError::Misconfigured("password1_sha256"))?,
            password2: self
                .password2
                .as_ref()
                .ok_or(RecoveryError::Misconfigured("password2_sha256"))?,
            answer1: self
                .answer1
                .as_ref()
                .ok_or(RecoveryError::Misconfigured("answer1_sha256"))?,
            answer2: self
                .answer2
                .as_ref()
                .ok_or(RecoveryError::Misconfigured("answer2_sha256"))?,
        })
    }
}

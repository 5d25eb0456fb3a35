//! The three phase verifiers.
//!
//! Checks run in a fixed order — email, password1, answer1, answer2,
//! password2 — and return on the first failure, so a caller never learns
//! which later check would also have failed. Each phase re-runs every
//! earlier phase's checks: there is no trust carried over from a prior call.

use crate::references::{Allowlist, ReadyReferences};
use crate::RecoveryError;
use atrium_crypto::{normalize_answer1, normalize_answer2};
use atrium_types::Email;

/// Phase 1: allow-list membership, then the first recovery password.
pub(crate) fn verify_phase1(
    allowlist: &Allowlist,
    references: ReadyReferences<'_>,
    email: &Email,
    password1: &str,
) -> Result<(), RecoveryError> {
    if !allowlist.contains(email) {
        return Err(RecoveryError::UnauthorizedEmail);
    }
    if !references.password1.matches(password1) {
        return Err(RecoveryError::InvalidPassword1);
    }
    Ok(())
}

/// Phase 2: phase-1 checks, then both security answers.
///
/// The first answer is normalized case- and whitespace-insensitively; the
/// second is a literal token, trimmed only.
pub(crate) fn verify_phase2(
    allowlist: &Allowlist,
    references: ReadyReferences<'_>,
    email: &Email,
    password1: &str,
    answer1: &str,
    answer2: &str,
) -> Result<(), RecoveryError> {
    verify_phase1(allowlist, references, email, password1)?;
    if !references.answer1.matches(&normalize_answer1(answer1)) {
        return Err(RecoveryError::WrongAnswer1);
    }
    if !references.answer2.matches(&normalize_answer2(answer2)) {
        return Err(RecoveryError::WrongAnswer2);
    }
    Ok(())
}

/// Phase 3: phase-1 and phase-2 checks, then the second recovery password.
pub(crate) fn verify_phase3(
    allowlist: &Allowlist,
    references: ReadyReferences<'_>,
    email: &Email,
    password1: &str,
    answer1: &str,
    answer2: &str,
    password2: &str,
) -> Result<(), RecoveryError> {
    verify_phase2(allowlist, references, email, password1, answer1, answer2)?;
    if !references.password2.matches(password2) {
        return Err(RecoveryError::InvalidPassword2);
    }
    Ok(())
}

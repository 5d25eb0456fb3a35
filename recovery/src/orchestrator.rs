//! The verification pipeline: classify, throttle, verify, promote.

use crate::notify::PromotionNotifier;
use crate::promote::PrivilegePromoter;
use crate::references::{Allowlist, SecretReferences};
use crate::request::{classify, Phase, RecoveryRequest};
use crate::throttle::{AttemptThrottle, ThrottlePolicy};
use crate::verifier::{verify_phase1, verify_phase2, verify_phase3};
use crate::RecoveryError;
use atrium_store::AccountStore;
use atrium_types::{Email, Timestamp};
use std::sync::Arc;

/// A successful evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// Phase 1 passed; the caller should resubmit with the answers.
    PasswordVerified,
    /// Phase 2 passed; the caller should resubmit with the second password.
    AnswersVerified,
    /// Phase 3 passed and the account's role has been restored.
    Restored(Email),
}

impl RecoveryOutcome {
    /// The step indicator reported for intermediate phases.
    pub fn step(&self) -> Option<u8> {
        match self {
            Self::PasswordVerified => Some(1),
            Self::AnswersVerified => Some(2),
            Self::Restored(_) => None,
        }
    }
}

/// The stateless recovery pipeline.
///
/// Holds the read-only allow-list and reference digests, the per-email
/// attempt throttle, and the promoter. One instance serves all requests
/// concurrently; the only mutable state is the throttle's failure map and
/// the account role written on phase 3.
pub struct RecoveryService {
    allowlist: Allowlist,
    references: SecretReferences,
    throttle: AttemptThrottle,
    promoter: PrivilegePromoter,
    notifier: Arc<dyn PromotionNotifier>,
}

impl RecoveryService {
    pub fn new(
        allowlist: Allowlist,
        references: SecretReferences,
        policy: ThrottlePolicy,
        store: Arc<dyn AccountStore>,
        notifier: Arc<dyn PromotionNotifier>,
    ) -> Self {
        Self {
            allowlist,
            references,
            throttle: AttemptThrottle::new(policy),
            promoter: PrivilegePromoter::new(store),
            notifier,
        }
    }

    /// Evaluate one request from scratch.
    ///
    /// Order of gates: classification (malformed requests stop here and do
    /// not consume attempts), reference completeness, throttle, then the
    /// phase's secret checks in fixed fail-fast order. A failed secret check
    /// records an attempt; any success clears the email's failure history.
    pub fn evaluate(
        &self,
        request: &RecoveryRequest,
        now: Timestamp,
    ) -> Result<RecoveryOutcome, RecoveryError> {
        let phase = classify(request)?;
        let references = self.references.ready().map_err(|e| {
            tracing::error!("recovery endpoint misconfigured: {e}");
            e
        })?;

        // An unparseable email cannot be on the allow-list.
        let email = match Email::parse(request.email.as_deref().unwrap_or_default()) {
            Ok(email) => email,
            Err(_) => return Err(RecoveryError::UnauthorizedEmail),
        };

        self.throttle.check(&email, now)?;

        let password1 = request.password1.as_deref().unwrap_or_default();
        let result = match phase {
            Phase::One => verify_phase1(&self.allowlist, references, &email, password1)
                .map(|_| RecoveryOutcome::PasswordVerified),
            Phase::Two => verify_phase2(
                &self.allowlist,
                references,
                &email,
                password1,
                request.answer1.as_deref().unwrap_or_default(),
                request.answer2.as_deref().unwrap_or_default(),
            )
            .map(|_| RecoveryOutcome::AnswersVerified),
            Phase::Three => verify_phase3(
                &self.allowlist,
                references,
                &email,
                password1,
                request.answer1.as_deref().unwrap_or_default(),
                request.answer2.as_deref().unwrap_or_default(),
                request.password2.as_deref().unwrap_or_default(),
            )
            .and_then(|()| self.promoter.promote(&email))
            .map(|record| {
                self.notifier.role_restored(&record.email);
                RecoveryOutcome::Restored(record.email)
            }),
        };

        match &result {
            Ok(outcome) => {
                self.throttle.clear(&email);
                match outcome {
                    RecoveryOutcome::Restored(restored) => {
                        tracing::info!(email = %restored.redacted(), "privilege restoration complete");
                    }
                    other => {
                        tracing::debug!(
                            email = %email.redacted(),
                            step = other.step(),
                            "recovery phase passed"
                        );
                    }
                }
            }
            Err(err) => {
                if err.counts_as_attempt() {
                    self.throttle.record_failure(&email, now);
                }
                if err.is_operator_fault() {
                    tracing::error!(email = %email.redacted(), "recovery failed: {err}");
                } else {
                    tracing::debug!(email = %email.redacted(), reason = err.code(), "recovery attempt rejected");
                }
            }
        }

        result
    }
}

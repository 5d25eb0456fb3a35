//! Per-email attempt throttling.
//!
//! The stateless protocol re-verifies secrets on every call, which also
//! means every call is a fresh guessing opportunity. This module bounds
//! that: after `max_attempts` failed secret checks for an email inside a
//! sliding window, further attempts are rejected until the window moves on.
//! Malformed requests never consume attempts; any successful phase clears
//! the email's failure history. Time is supplied by the caller so the policy
//! is deterministic under test.

use crate::RecoveryError;
use atrium_types::{Email, Timestamp};
use std::collections::HashMap;
use std::sync::Mutex;

/// Throttle tuning. `max_attempts == 0` disables enforcement.
#[derive(Clone, Copy, Debug)]
pub struct ThrottlePolicy {
    pub max_attempts: u32,
    pub window_secs: u64,
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            window_secs: 900,
        }
    }
}

/// Sliding-window failure tracker keyed by canonical email.
pub struct AttemptThrottle {
    policy: ThrottlePolicy,
    failures: Mutex<HashMap<Email, Vec<Timestamp>>>,
}

impl AttemptThrottle {
    pub fn new(policy: ThrottlePolicy) -> Self {
        Self {
            policy,
            failures: Mutex::new(HashMap::new()),
        }
    }

    /// Reject with `too-many-attempts` if the email has exhausted its window.
    pub fn check(&self, email: &Email, now: Timestamp) -> Result<(), RecoveryError> {
        if self.policy.max_attempts == 0 {
            return Ok(());
        }
        let mut failures = self.failures.lock().unwrap();
        let Some(entries) = failures.get_mut(email) else {
            return Ok(());
        };
        entries.retain(|t| !t.has_expired(self.policy.window_secs, now));
        if (entries.len() as u32) < self.policy.max_attempts {
            return Ok(());
        }
        let oldest = entries.iter().min().copied().unwrap_or(now);
        let retry_after_secs = oldest
            .as_secs()
            .saturating_add(self.policy.window_secs)
            .saturating_sub(now.as_secs());
        Err(RecoveryError::TooManyAttempts { retry_after_secs })
    }

    /// Record a failed secret check for this email.
    pub fn record_failure(&self, email: &Email, now: Timestamp) {
        if self.policy.max_attempts == 0 {
            return;
        }
        self.failures
            .lock()
            .unwrap()
            .entry(email.clone())
            .or_default()
            .push(now);
    }

    /// Forget all failures for this email (called on any successful phase).
    pub fn clear(&self, email: &Email) {
        self.failures.lock().unwrap().remove(email);
    }
}

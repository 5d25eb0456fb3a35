//! Notification seam for successful promotions.
//!
//! The platform's outbound email subsystem is an external collaborator;
//! deployments implement [`PromotionNotifier`] over it. A notifier must not
//! fail the request — whatever it does with delivery errors is its own
//! concern.

use atrium_types::Email;

pub trait PromotionNotifier: Send + Sync {
    /// Called once after the account's elevated role has been persisted.
    fn role_restored(&self, email: &Email);
}

/// Default notifier: records the promotion in the structured log.
pub struct LogNotifier;

impl PromotionNotifier for LogNotifier {
    fn role_restored(&self, email: &Email) {
        tracing::info!(email = %email.redacted(), "super-admin role restored");
    }
}

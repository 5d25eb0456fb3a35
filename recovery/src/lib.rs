//! Super-admin privilege restoration.
//!
//! A designated super administrator who has lost elevated access reclaims it
//! by passing three independent secret challenges in sequence:
//!
//! 1. **Password**: first recovery password, gated by the email allow-list.
//! 2. **Answers**: two security answers (one free-text, one literal token).
//! 3. **Confirmation**: second recovery password; on success the account's
//!    role is overwritten to the elevated value.
//!
//! The pipeline is stateless: no session or ticket survives between calls.
//! Every request carries whatever secrets the caller has, and every phase
//! re-verifies all earlier checks from scratch. Reference digests are held by
//! the process (deployment configuration), never by the account store.

pub mod error;
pub mod notify;
pub mod orchestrator;
pub mod promote;
pub mod references;
pub mod request;
pub mod throttle;
pub mod verifier;

pub use error::RecoveryError;
pub use notify::{LogNotifier, PromotionNotifier};
pub use orchestrator::{RecoveryOutcome, RecoveryService};
pub use promote::PrivilegePromoter;
pub use references::{Allowlist, SecretReferences};
pub use request::{classify, Phase, RecoveryRequest};
pub use throttle::{AttemptThrottle, ThrottlePolicy};

//! Privilege promotion — the single mutating operation in the pipeline.

use crate::RecoveryError;
use atrium_store::{AccountRecord, AccountStore, StoreError};
use atrium_types::{Email, Role};
use std::sync::Arc;

/// Overwrites the target account's role with the elevated value after all
/// three phases have passed.
///
/// Idempotent: promoting an already-elevated account rewrites the same role
/// value. Accounts are never created here.
pub struct PrivilegePromoter {
    store: Arc<dyn AccountStore>,
}

impl PrivilegePromoter {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    pub fn promote(&self, email: &Email) -> Result<AccountRecord, RecoveryError> {
        match self.store.update_role(email, Role::SuperAdmin) {
            Ok(record) => Ok(record),
            Err(StoreError::NotFound(_)) => Err(RecoveryError::AccountNotFound(email.clone())),
            Err(other) => Err(RecoveryError::Store(other)),
        }
    }
}

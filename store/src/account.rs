//! Account storage trait.

use crate::StoreError;
use atrium_types::{Email, Role, Timestamp};
use serde::{Deserialize, Serialize};

/// A platform account as held by the external account store.
///
/// The primary email is the unique key. The recovery protocol's only write
/// is overwriting `role`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountRecord {
    pub email: Email,
    pub role: Role,
    /// Public display name shown on the member's profile.
    pub display_name: String,
    pub created_at: Timestamp,
}

/// Trait for account storage operations.
pub trait AccountStore: Send + Sync {
    fn get_account(&self, email: &Email) -> Result<AccountRecord, StoreError>;
    fn put_account(&self, record: &AccountRecord) -> Result<(), StoreError>;
    fn account_count(&self) -> Result<u64, StoreError>;

    /// Overwrite the role of an existing account and return the updated
    /// record. Fails with [`StoreError::NotFound`] if the account does not
    /// exist; accounts are never created through this path.
    fn update_role(&self, email: &Email, role: Role) -> Result<AccountRecord, StoreError> {
        let mut record = self.get_account(email)?;
        record.role = role;
        self.put_account(&record)?;
        Ok(record)
    }
}

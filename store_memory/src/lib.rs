//! In-memory account store.
//!
//! Thread-safe for use with tokio's multi-threaded runtime. Used by tests
//! and dev deployments; production services point the [`AccountStore`] trait
//! at the platform's account database instead.

use atrium_store::{AccountRecord, AccountStore, StoreError};
use atrium_types::Email;
use std::collections::HashMap;
use std::sync::Mutex;

/// A mutex-guarded map of accounts keyed by canonical email.
pub struct MemoryAccountStore {
    accounts: Mutex<HashMap<Email, AccountRecord>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
        }
    }

    /// Seed the store with a batch of accounts, replacing any existing
    /// records with the same email.
    pub fn seed(&self, records: impl IntoIterator<Item = AccountRecord>) {
        let mut accounts = self.accounts.lock().unwrap();
        for record in records {
            accounts.insert(record.email.clone(), record);
        }
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for MemoryAccountStore {
    fn get_account(&self, email: &Email) -> Result<AccountRecord, StoreError> {
        self.accounts
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(email.to_string()))
    }

    fn put_account(&self, record: &AccountRecord) -> Result<(), StoreError> {
        self.accounts
            .lock()
            .unwrap()
            .insert(record.email.clone(), record.clone());
        Ok(())
    }

    fn account_count(&self) -> Result<u64, StoreError> {
        Ok(self.accounts.lock().unwrap().len() as u64)
    }
}

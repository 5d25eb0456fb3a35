//! Abstract storage traits for Atrium services.
//!
//! The platform's account database is owned by the surrounding application;
//! services in this workspace depend only on these traits. Backends (the
//! production database client, the in-memory store for tests and dev) live
//! in their own crates.

pub mod account;
pub mod error;

pub use account::{AccountRecord, AccountStore};
pub use error::StoreError;

//! Fundamental types for the Atrium platform.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: email identities, account roles, and timestamps.

pub mod email;
pub mod role;
pub mod time;

pub use email::{Email, InvalidEmail};
pub use role::Role;
pub use time::Timestamp;

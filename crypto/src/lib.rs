//! Cryptographic primitives for the Atrium recovery protocol.
//!
//! - **SHA-256** for one-way reference digests, hex-encoded in configuration
//! - Answer normalization so trivial formatting differences do not cause
//!   false rejections
//!
//! Reference digests are server-held secrets, never transmitted tokens, so
//! plain unkeyed hashing is sufficient; there is no HMAC here.

pub mod digest;
pub mod normalize;

pub use digest::{DigestParseError, Sha256Digest};
pub use normalize::{normalize_answer1, normalize_answer2};

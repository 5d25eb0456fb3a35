//! Shared utilities for Atrium services.

pub mod logging;

pub use logging::{init_logging, LogFormat};

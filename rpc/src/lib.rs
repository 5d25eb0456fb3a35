//! HTTP surface for the recovery service.
//!
//! A single JSON endpoint, `POST /v1/recovery`, drives the stateless
//! verification pipeline; `GET /v1/health` serves deployment probes.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use handlers::{RestoreAccessRequest, RestoreAccessResponse};
pub use server::RpcServer;

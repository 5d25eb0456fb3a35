//! Axum-based RPC server.

use crate::error::RpcError;
use crate::handlers::{RestoreAccessRequest, RestoreAccessResponse};
use atrium_recovery::RecoveryService;
use atrium_types::Timestamp;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub struct RpcServer {
    pub port: u16,
    service: Arc<RecoveryService>,
}

impl RpcServer {
    pub fn new(port: u16, service: Arc<RecoveryService>) -> Self {
        Self { port, service }
    }

    /// Build the router. Exposed separately from [`start`](Self::start) so
    /// tests can drive it without binding a socket.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/v1/recovery", post(restore_access))
            .route("/v1/health", get(health))
            .layer(CorsLayer::permissive())
            .with_state(self.service.clone())
    }

    /// Bind and serve until shutdown.
    pub async fn start(&self) -> Result<(), RpcError> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        info!("recovery RPC server listening on {addr}");
        axum::serve(listener, self.router())
            .await
            .map_err(|e| RpcError::Server(e.to_string()))
    }
}

/// `POST /v1/recovery` — evaluate one recovery attempt from scratch.
async fn restore_access(
    State(service): State<Arc<RecoveryService>>,
    Json(request): Json<RestoreAccessRequest>,
) -> Result<Json<RestoreAccessResponse>, RpcError> {
    let outcome = service.evaluate(&request.into_core(), Timestamp::now())?;
    Ok(Json(outcome.into()))
}

/// `GET /v1/health` — liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

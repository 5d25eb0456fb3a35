//! RPC error type and HTTP status mapping.

use atrium_recovery::RecoveryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Recovery(#[from] RecoveryError),

    #[error("server error: {0}")]
    Server(String),
}

impl RpcError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Recovery(err) => match err {
                RecoveryError::Malformed(_) => StatusCode::BAD_REQUEST,
                RecoveryError::UnauthorizedEmail
                | RecoveryError::InvalidPassword1
                | RecoveryError::WrongAnswer1
                | RecoveryError::WrongAnswer2
                | RecoveryError::InvalidPassword2 => StatusCode::FORBIDDEN,
                RecoveryError::AccountNotFound(_) => StatusCode::NOT_FOUND,
                RecoveryError::TooManyAttempts { .. } => StatusCode::TOO_MANY_REQUESTS,
                RecoveryError::Misconfigured(_) | RecoveryError::Store(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The wire reason string. Fixed per taxonomy entry; reveals nothing
    /// about the other, unchecked secrets.
    fn reason(&self) -> &'static str {
        match self {
            Self::Recovery(err) => err.code(),
            Self::Server(_) => "internal-error",
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.reason() }));
        (status, body).into_response()
    }
}

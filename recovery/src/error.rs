use atrium_store::StoreError;
use atrium_types::Email;
use thiserror::Error;

/// Every way a recovery attempt can fail.
///
/// The verifier returns on the first failing check, so a caller never learns
/// which later check would also have failed.
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("malformed request: {0}")]
    Malformed(&'static str),

    #[error("email is not authorized for recovery")]
    UnauthorizedEmail,

    #[error("first recovery password does not match")]
    InvalidPassword1,

    #[error("first security answer does not match")]
    WrongAnswer1,

    #[error("second security answer does not match")]
    WrongAnswer2,

    #[error("second recovery password does not match")]
    InvalidPassword2,

    #[error("no account exists for {0}")]
    AccountNotFound(Email),

    #[error("too many failed attempts; retry in {retry_after_secs}s")]
    TooManyAttempts { retry_after_secs: u64 },

    #[error("recovery reference secrets are not configured: {0}")]
    Misconfigured(&'static str),

    #[error("storage error: {0}")]
    Store(StoreError),
}

impl RecoveryError {
    /// Stable machine-readable reason, used as the wire error string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed-request",
            Self::UnauthorizedEmail => "unauthorized-email",
            Self::InvalidPassword1 => "invalid-password-1",
            Self::WrongAnswer1 => "wrong-answer-1",
            Self::WrongAnswer2 => "wrong-answer-2",
            Self::InvalidPassword2 => "invalid-password-2",
            Self::AccountNotFound(_) => "account-not-found",
            Self::TooManyAttempts { .. } => "too-many-attempts",
            Self::Misconfigured(_) => "server-misconfigured",
            Self::Store(_) => "storage-error",
        }
    }

    /// Whether this failure consumes a throttle attempt. Only actual secret
    /// mismatches count; malformed or misconfigured requests do not.
    pub fn counts_as_attempt(&self) -> bool {
        matches!(
            self,
            Self::UnauthorizedEmail
                | Self::InvalidPassword1
                | Self::WrongAnswer1
                | Self::WrongAnswer2
                | Self::InvalidPassword2
        )
    }

    /// Whether an operator should be alarmed. Everything else is a routine
    /// caller error and must not be logged as an incident.
    pub fn is_operator_fault(&self) -> bool {
        matches!(self, Self::Misconfigured(_) | Self::Store(_))
    }
}

//! Wire DTOs for the recovery endpoint.
//!
//! The legacy client marks a not-yet-supplied field with the sentinel string
//! `"___"`; newer clients omit the field or send an empty string. All three
//! spellings are translated to `None` here so the core pipeline only ever
//! sees typed options.

use atrium_recovery::{RecoveryOutcome, RecoveryRequest};
use serde::{Deserialize, Serialize};

/// Legacy wire marker for "field not yet supplied".
const UNSET_SENTINEL: &str = "___";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RestoreAccessRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password1: Option<String>,
    #[serde(default)]
    pub answer1: Option<String>,
    #[serde(default)]
    pub answer2: Option<String>,
    #[serde(default)]
    pub password2: Option<String>,
}

fn desentinel(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty() && s != UNSET_SENTINEL)
}

impl RestoreAccessRequest {
    /// Translate the wire shape into the core request.
    pub fn into_core(self) -> RecoveryRequest {
        RecoveryRequest {
            email: desentinel(self.email),
            password1: desentinel(self.password1),
            answer1: desentinel(self.answer1),
            answer2: desentinel(self.answer2),
            password2: desentinel(self.password2),
        }
    }
}

/// Success shapes: a step indicator for phases 1-2, the restored email for
/// the final phase.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum RestoreAccessResponse {
    Step { success: bool, step: u8 },
    Restored { success: bool, restored: String },
}

impl From<RecoveryOutcome> for RestoreAccessResponse {
    fn from(outcome: RecoveryOutcome) -> Self {
        match outcome {
            RecoveryOutcome::Restored(email) => Self::Restored {
                success: true,
                restored: email.to_string(),
            },
            stepped => Self::Step {
                success: true,
                // step() is Some for every non-Restored outcome
                step: stepped.step().unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_types::Email;

    #[test]
    fn sentinel_and_empty_become_absent() {
        let wire = RestoreAccessRequest {
            email: Some("super@org.example".to_string()),
            password1: Some("pw1".to_string()),
            answer1: Some(UNSET_SENTINEL.to_string()),
            answer2: Some(String::new()),
            password2: None,
        };
        let core = wire.into_core();
        assert_eq!(core.email.as_deref(), Some("super@org.example"));
        assert_eq!(core.password1.as_deref(), Some("pw1"));
        assert!(core.answer1.is_none());
        assert!(core.answer2.is_none());
        assert!(core.password2.is_none());
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let wire: RestoreAccessRequest =
            serde_json::from_str(r#"{"email":"a@b.example","password1":"pw"}"#).unwrap();
        assert!(wire.answer1.is_none());
        assert!(wire.password2.is_none());
    }

    #[test]
    fn step_response_serializes_flat() {
        let json =
            serde_json::to_string(&RestoreAccessResponse::from(RecoveryOutcome::PasswordVerified))
                .unwrap();
        assert_eq!(json, r#"{"success":true,"step":1}"#);
    }

    #[test]
    fn restored_response_carries_email() {
        let outcome = RecoveryOutcome::Restored(Email::parse("super@org.example").unwrap());
        let json = serde_json::to_string(&RestoreAccessResponse::from(outcome)).unwrap();
        assert_eq!(json, r#"{"success":true,"restored":"super@org.example"}"#);
    }
}

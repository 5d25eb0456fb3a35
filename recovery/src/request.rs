//! The transient recovery request and the phase classifier.
//!
//! Which phase a caller is attempting is inferred from which optional fields
//! are supplied; there is no server-side session and no trust carried over
//! from earlier calls. The wire layer translates the legacy sentinel value
//! and empty strings to `None` before this type is built, so presence here
//! is plain `Option` semantics.

use crate::RecoveryError;

/// The inbound payload. Never persisted.
#[derive(Clone, Debug, Default)]
pub struct RecoveryRequest {
    pub email: Option<String>,
    pub password1: Option<String>,
    pub answer1: Option<String>,
    pub answer2: Option<String>,
    pub password2: Option<String>,
}

/// Which of the three verification phases a request is attempting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Allow-list + first recovery password.
    One,
    /// Both security answers (phase-1 checks re-run first).
    Two,
    /// Second recovery password (phase-1 and phase-2 checks re-run first).
    Three,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

/// Classify a request into exactly one phase, or reject it as malformed.
///
/// Runs before any secret comparison and never touches the reference store.
/// `email` and `password1` are required for every phase. A `password2`
/// without both answers can never be sent by a legitimate client and is
/// rejected here rather than burning a secret check.
pub fn classify(request: &RecoveryRequest) -> Result<Phase, RecoveryError> {
    if !present(&request.email) || !present(&request.password1) {
        return Err(RecoveryError::Malformed("email and password1 are required"));
    }

    match (
        present(&request.answer1),
        present(&request.answer2),
        present(&request.password2),
    ) {
        (false, false, false) => Ok(Phase::One),
        (true, true, false) => Ok(Phase::Two),
        (true, true, true) => Ok(Phase::Three),
        (_, _, true) => Err(RecoveryError::Malformed(
            "password2 requires answer1 and answer2",
        )),
        _ => Err(RecoveryError::Malformed(
            "answer1 and answer2 must be supplied together",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        email: Option<&str>,
        password1: Option<&str>,
        answer1: Option<&str>,
        answer2: Option<&str>,
        password2: Option<&str>,
    ) -> RecoveryRequest {
        RecoveryRequest {
            email: email.map(String::from),
            password1: password1.map(String::from),
            answer1: answer1.map(String::from),
            answer2: answer2.map(String::from),
            password2: password2.map(String::from),
        }
    }

    #[test]
    fn password_only_is_phase_one() {
        let req = request(Some("a@b.example"), Some("pw"), None, None, None);
        assert_eq!(classify(&req).unwrap(), Phase::One);
    }

    #[test]
    fn both_answers_is_phase_two() {
        let req = request(Some("a@b.example"), Some("pw"), Some("x"), Some("y"), None);
        assert_eq!(classify(&req).unwrap(), Phase::Two);
    }

    #[test]
    fn password2_with_answers_is_phase_three() {
        let req = request(
            Some("a@b.example"),
            Some("pw"),
            Some("x"),
            Some("y"),
            Some("pw2"),
        );
        assert_eq!(classify(&req).unwrap(), Phase::Three);
    }

    #[test]
    fn missing_email_is_malformed_regardless_of_other_fields() {
        let req = request(None, Some("pw"), Some("x"), Some("y"), Some("pw2"));
        assert!(matches!(classify(&req), Err(RecoveryError::Malformed(_))));
    }

    #[test]
    fn missing_password1_is_malformed() {
        let req = request(Some("a@b.example"), None, None, None, None);
        assert!(matches!(classify(&req), Err(RecoveryError::Malformed(_))));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let req = request(Some("a@b.example"), Some("pw"), Some(""), Some(""), None);
        assert_eq!(classify(&req).unwrap(), Phase::One);
    }

    #[test]
    fn single_answer_is_malformed() {
        let req = request(Some("a@b.example"), Some("pw"), Some("x"), None, None);
        assert!(matches!(classify(&req), Err(RecoveryError::Malformed(_))));
    }

    #[test]
    fn password2_without_answers_is_malformed() {
        let req = request(Some("a@b.example"), Some("pw"), None, None, Some("pw2"));
        assert!(matches!(classify(&req), Err(RecoveryError::Malformed(_))));
    }
}

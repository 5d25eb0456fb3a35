//! Canonical email identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a string cannot be parsed as an email address.
#[derive(Debug, Error)]
#[error("invalid email address: {0:?}")]
pub struct InvalidEmail(pub String);

/// A canonicalized email address, the primary identity of an account.
///
/// Canonical form is lowercase with surrounding whitespace trimmed, so two
/// addresses that differ only in case or padding compare equal. Construct via
/// [`Email::parse`]; the inner string is never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse and canonicalize an email address.
    ///
    /// Validation is deliberately shallow: one `@` with non-empty local and
    /// domain parts. The allow-list, not syntax, is the real gate.
    pub fn parse(raw: &str) -> Result<Self, InvalidEmail> {
        let canonical = raw.trim().to_lowercase();
        let mut parts = canonical.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        match parts.next() {
            Some(domain) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
                Ok(Self(canonical))
            }
            _ => Err(InvalidEmail(raw.to_string())),
        }
    }

    /// Return the canonical address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A log-safe rendering: first character of the local part kept, the
    /// rest masked, domain preserved (`s***@org.example`).
    pub fn redacted(&self) -> String {
        match self.0.split_once('@') {
            Some((local, domain)) => {
                let head: String = local.chars().take(1).collect();
                format!("{head}***@{domain}")
            }
            None => "***".to_string(),
        }
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = InvalidEmail;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonicalizes_case_and_padding() {
        let email = Email::parse("  Super@Org.Example ").unwrap();
        assert_eq!(email.as_str(), "super@org.example");
    }

    #[test]
    fn equal_after_canonicalization() {
        let a = Email::parse("admin@example.com").unwrap();
        let b = Email::parse("ADMIN@EXAMPLE.COM").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(Email::parse("not-an-email").is_err());
    }

    #[test]
    fn rejects_empty_local_or_domain() {
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("admin@").is_err());
        assert!(Email::parse("").is_err());
    }

    #[test]
    fn rejects_double_at() {
        assert!(Email::parse("a@b@c.example").is_err());
    }

    #[test]
    fn redacted_masks_local_part() {
        let email = Email::parse("super@org.example").unwrap();
        assert_eq!(email.redacted(), "s***@org.example");
    }

    #[test]
    fn serde_round_trip_canonicalizes() {
        let email: Email = serde_json::from_str("\" Super@Org.Example \"").unwrap();
        assert_eq!(email.as_str(), "super@org.example");
        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            "\"super@org.example\""
        );
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }
}

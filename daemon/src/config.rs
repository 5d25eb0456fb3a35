//! Daemon configuration with TOML file support.

use atrium_crypto::Sha256Digest;
use atrium_recovery::{Allowlist, SecretReferences, ThrottlePolicy};
use atrium_store::AccountRecord;
use atrium_types::{Email, Role, Timestamp};
use serde::{Deserialize, Serialize};

/// Configuration for the recovery daemon.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Port the RPC server binds on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// The recovery protocol's deployment surface.
    #[serde(default)]
    pub recovery: RecoveryConfig,

    /// Accounts to seed into the in-memory store. Dev/test deployments only;
    /// production points the store trait at the platform's account database.
    #[serde(default)]
    pub accounts: Vec<AccountSeed>,
}

/// Allow-listed recovery emails and reference secret digests.
///
/// Any absent digest leaves the endpoint serving `server-misconfigured`
/// until the deployment supplies it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecoveryConfig {
    #[serde(default)]
    pub allowed_emails: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password1_sha256: Option<Sha256Digest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password2_sha256: Option<Sha256Digest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer1_sha256: Option<Sha256Digest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer2_sha256: Option<Sha256Digest>,

    /// Failed attempts allowed per email before throttling; 0 disables.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Sliding throttle window in seconds.
    #[serde(default = "default_attempt_window_secs")]
    pub attempt_window_secs: u64,
}

/// One seeded account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountSeed {
    pub email: String,
    #[serde(default = "default_seed_role")]
    pub role: Role,
    #[serde(default)]
    pub display_name: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_listen_port() -> u16 {
    8087
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_max_attempts() -> u32 {
    5
}

fn default_attempt_window_secs() -> u64 {
    900
}

fn default_seed_role() -> Role {
    Role::Member
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))
    }

    /// Build the allow-list; a malformed entry is a configuration error.
    pub fn allowlist(&self) -> anyhow::Result<Allowlist> {
        let mut emails = Vec::with_capacity(self.recovery.allowed_emails.len());
        for raw in &self.recovery.allowed_emails {
            emails.push(
                Email::parse(raw)
                    .map_err(|e| anyhow::anyhow!("allowed_emails entry rejected: {e}"))?,
            );
        }
        Ok(Allowlist::new(emails))
    }

    pub fn references(&self) -> SecretReferences {
        SecretReferences {
            password1: self.recovery.password1_sha256,
            password2: self.recovery.password2_sha256,
            answer1: self.recovery.answer1_sha256,
            answer2: self.recovery.answer2_sha256,
        }
    }

    pub fn throttle_policy(&self) -> ThrottlePolicy {
        ThrottlePolicy {
            max_attempts: self.recovery.max_attempts,
            window_secs: self.recovery.attempt_window_secs,
        }
    }

    /// Materialize the seeded accounts, stamping `created_at` with `now`.
    pub fn seed_records(&self, now: Timestamp) -> anyhow::Result<Vec<AccountRecord>> {
        let mut records = Vec::with_capacity(self.accounts.len());
        for seed in &self.accounts {
            records.push(AccountRecord {
                email: Email::parse(&seed.email)
                    .map_err(|e| anyhow::anyhow!("accounts entry rejected: {e}"))?,
                role: seed.role,
                display_name: seed.display_name.clone(),
                created_at: now,
            });
        }
        Ok(records)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            recovery: RecoveryConfig::default(),
            accounts: Vec::new(),
        }
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            allowed_emails: Vec::new(),
            password1_sha256: None,
            password2_sha256: None,
            answer1_sha256: None,
            answer2_sha256: None,
            max_attempts: default_max_attempts(),
            attempt_window_secs: default_attempt_window_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = ServiceConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.listen_port, 8087);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.recovery.max_attempts, 5);
        assert!(!config.references().is_complete());
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            listen_port = 9999

            [recovery]
            allowed_emails = ["super@org.example"]
            max_attempts = 3
        "#;
        let config = ServiceConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.listen_port, 9999);
        assert_eq!(config.recovery.max_attempts, 3);
        assert_eq!(config.log_format, "human"); // default
        assert_eq!(config.allowlist().unwrap().len(), 1);
    }

    #[test]
    fn reference_digests_parse_from_hex() {
        let digest = Sha256Digest::compute(b"pw1");
        let toml = format!(
            r#"
            [recovery]
            password1_sha256 = "{}"
            "#,
            digest.to_hex()
        );
        let config = ServiceConfig::from_toml_str(&toml).expect("should parse");
        assert_eq!(config.recovery.password1_sha256, Some(digest));
        assert!(!config.references().is_complete());
    }

    #[test]
    fn invalid_reference_hex_is_a_startup_error() {
        let toml = r#"
            [recovery]
            password1_sha256 = "not-hex"
        "#;
        assert!(ServiceConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn malformed_allowlist_entry_is_an_error() {
        let toml = r#"
            [recovery]
            allowed_emails = ["not-an-email"]
        "#;
        let config = ServiceConfig::from_toml_str(toml).expect("should parse");
        assert!(config.allowlist().is_err());
    }

    #[test]
    fn seeded_accounts_materialize() {
        let toml = r#"
            [[accounts]]
            email = "super@org.example"
            role = "member"
            display_name = "Site Admin"
        "#;
        let config = ServiceConfig::from_toml_str(toml).expect("should parse");
        let records = config.seed_records(Timestamp::new(1_700_000_000)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].role, Role::Member);
        assert_eq!(records[0].email.as_str(), "super@org.example");
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ServiceConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serializable");
        let parsed = ServiceConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.listen_port, config.listen_port);
        assert_eq!(parsed.recovery.max_attempts, config.recovery.max_attempts);
    }

    #[test]
    fn config_file_loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atrium.toml");
        std::fs::write(&path, "listen_port = 9000\n").unwrap();
        let config = ServiceConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.listen_port, 9000);
    }

    #[test]
    fn missing_file_returns_error() {
        let result = ServiceConfig::from_toml_file(std::path::Path::new("/nonexistent/atrium.toml"));
        assert!(result.is_err());
    }
}

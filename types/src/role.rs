//! Account role enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The role attached to an account.
///
/// `SuperAdmin` is the elevated role the recovery protocol restores; a
/// demoted super administrator holds one of the lower roles until the
/// protocol promotes them again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Ordinary platform member.
    Member,
    /// Content moderator / listings administrator.
    Admin,
    /// Full platform control, including deployment-level settings.
    SuperAdmin,
}

impl Role {
    /// Whether this role carries elevated (super-admin) access.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

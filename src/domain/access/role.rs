//! User role definitions.

use serde::{Deserialize, Serialize};

/// Access tier stored on a user record.
///
/// Only `Admin` is distinguished; every other user is a `Guest`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Admin,
}

impl Role {
    /// Returns true if this role grants elevated operations.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Returns the stored representation of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Admin => "admin",
        }
    }

    /// Parses the stored representation. Unknown values fall back to `Guest`.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("admin") => Role::Admin,
            _ => Role::Guest,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

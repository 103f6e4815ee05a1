//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Declares a UUID-backed identifier with the usual constructors.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| ValidationError::invalid_format(stringify!($name), e.to_string()))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a stored user record.
    UserId
);

uuid_id!(
    /// Unique identifier for a menu item.
    MenuItemId
);

uuid_id!(
    /// Unique identifier for a cart entry.
    CartItemId
);

uuid_id!(
    /// Unique identifier for a persisted payment.
    PaymentId
);

uuid_id!(
    /// Unique identifier for a review.
    ReviewId
);

/// Email address used as the identity claim of a user.
///
/// Comparison is exact; the credential and the stored record must carry
/// the same spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new Email, rejecting empty values and values without `@`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !trimmed.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
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
    fn ids_are_unique() {
        assert_ne!(CartItemId::new(), CartItemId::new());
        assert_ne!(PaymentId::new(), PaymentId::new());
    }

    #[test]
    fn id_parses_from_string() {
        let id = CartItemId::new();
        let parsed: CartItemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn id_rejects_garbage() {
        let result = "id1".parse::<MenuItemId>();
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn id_serializes_transparently() {
        let uuid = Uuid::new_v4();
        let id = PaymentId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }

    #[test]
    fn email_accepts_valid_address() {
        let email = Email::new("a@x.com").unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn email_trims_whitespace() {
        let email = Email::new("  a@x.com ").unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn email_rejects_empty() {
        assert!(matches!(Email::new("  "), Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn email_rejects_missing_at() {
        assert!(Email::new("not-an-email").is_err());
    }

    #[test]
    fn email_deserialization_validates() {
        let ok: Result<Email, _> = serde_json::from_str("\"a@x.com\"");
        assert!(ok.is_ok());
        let bad: Result<Email, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }
}

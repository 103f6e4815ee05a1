//! Authentication types for the domain layer.
//!
//! These types represent the caller identity recovered from a bearer
//! credential. They have **no external dependencies**; the token codec
//! adapter populates them via the `TokenCodec` port.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after credential verification:
//! let user = codec.verify(token)?;
//!
//! // Inject into request extensions for handlers to use
//! request.extensions_mut().insert(user);
//! ```

use super::{Email, Timestamp};
use thiserror::Error;

/// Caller identity extracted from a verified credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The identity claim carried by the credential.
    pub email: Email,

    /// When the credential stops being accepted.
    pub expires_at: Timestamp,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(email: Email, expires_at: Timestamp) -> Self {
        Self { email, expires_at }
    }

    /// Returns true if this identity is the given subject.
    pub fn is(&self, subject: &Email) -> bool {
        &self.email == subject
    }
}

/// Reasons the authorization gate refuses a request.
///
/// Callers only ever see two outcomes, `Unauthenticated` (401) and
/// `Forbidden` (403); the finer variants exist for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization: Bearer` header, or the header is not a bearer value.
    #[error("Missing bearer credential")]
    MissingCredential,

    /// The credential is malformed or its signature does not verify.
    #[error("Invalid credential")]
    InvalidToken,

    /// The credential verified but is past its expiry.
    #[error("Credential expired")]
    TokenExpired,

    /// Authenticated, but the stored role does not allow the operation.
    #[error("Insufficient role")]
    InsufficientRole,

    /// Authenticated, but acting on another identity's resources.
    #[error("Identity mismatch")]
    IdentityMismatch,

    /// The credential could not be minted (signing failure).
    #[error("Credential signing failed: {0}")]
    SigningFailed(String),
}

impl AuthError {
    /// Returns true if the caller must present a (new) credential.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::MissingCredential | AuthError::InvalidToken | AuthError::TokenExpired
        )
    }

    /// Returns true if the caller is known but not allowed.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, AuthError::InsufficientRole | AuthError::IdentityMismatch)
    }

    /// Short label used in log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "missing-credential",
            AuthError::InvalidToken | AuthError::TokenExpired => "invalid-or-expired",
            AuthError::InsufficientRole => "insufficient-role",
            AuthError::IdentityMismatch => "identity-mismatch",
            AuthError::SigningFailed(_) => "signing-failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_email() -> Email {
        Email::new("a@x.com").unwrap()
    }

    #[test]
    fn authenticated_user_matches_own_subject() {
        let user = AuthenticatedUser::new(test_email(), Timestamp::now());
        assert!(user.is(&test_email()));
        assert!(!user.is(&Email::new("b@x.com").unwrap()));
    }

    #[test]
    fn credential_errors_are_unauthenticated() {
        assert!(AuthError::MissingCredential.is_unauthenticated());
        assert!(AuthError::InvalidToken.is_unauthenticated());
        assert!(AuthError::TokenExpired.is_unauthenticated());
        assert!(!AuthError::InsufficientRole.is_unauthenticated());
    }

    #[test]
    fn role_and_subject_errors_are_forbidden() {
        assert!(AuthError::InsufficientRole.is_forbidden());
        assert!(AuthError::IdentityMismatch.is_forbidden());
        assert!(!AuthError::TokenExpired.is_forbidden());
    }

    #[test]
    fn invalid_and_expired_share_a_reason() {
        assert_eq!(AuthError::InvalidToken.reason(), "invalid-or-expired");
        assert_eq!(AuthError::TokenExpired.reason(), "invalid-or-expired");
        assert_eq!(AuthError::MissingCredential.reason(), "missing-credential");
    }
}

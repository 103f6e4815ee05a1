//! Token codec port for bearer credentials.
//!
//! Defines the contract for minting and verifying the signed credentials
//! carried in `Authorization: Bearer <token>`. Both operations are pure
//! computations over a shared secret, so the trait is synchronous.
//!
//! # Contract
//!
//! Implementations must:
//! - Embed the identity claim (email), issue time, and expiry
//! - Reject tokens whose signature does not verify with `AuthError::InvalidToken`
//! - Reject structurally malformed tokens with `AuthError::InvalidToken`
//! - Reject tokens past their expiry with `AuthError::TokenExpired`
//!
//! For any claim, `verify(issue(claim))` yields that claim until expiry.

use crate::domain::foundation::{AuthError, AuthenticatedUser, Email};

/// A freshly minted credential.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The encoded credential.
    pub token: String,

    /// Seconds until the credential expires.
    pub expires_in: u64,
}

/// Signs and verifies bearer credentials.
pub trait TokenCodec: Send + Sync {
    /// Mint a credential for the given identity claim.
    ///
    /// # Errors
    ///
    /// * `AuthError::SigningFailed` - The signing key could not be used
    fn issue(&self, email: &Email) -> Result<IssuedToken, AuthError>;

    /// Verify a raw credential (without the `Bearer ` prefix).
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticatedUser)` - Signature valid and not expired
    /// * `Err(AuthError::InvalidToken)` - Malformed or bad signature
    /// * `Err(AuthError::TokenExpired)` - Signature valid but expired
    fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

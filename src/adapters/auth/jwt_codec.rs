//! HS256 JWT implementation of the `TokenCodec` port.
//!
//! Credentials carry `{email, iat, exp}` and are signed with the shared
//! access-token secret. Expiry is checked with zero leeway.
//!
//! # Example
//!
//! ```ignore
//! let codec = JwtTokenCodec::new(SecretString::new("secret".into()), 3600);
//! let issued = codec.issue(&Email::new("a@x.com")?)?;
//! let user = codec.verify(&issued.token)?;
//! assert_eq!(user.email.as_str(), "a@x.com");
//! ```

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, Email, Timestamp};
use crate::ports::{IssuedToken, TokenCodec};

/// Claims embedded in every credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccessClaims {
    /// Identity claim
    email: String,
    /// Issued at (Unix timestamp)
    iat: i64,
    /// Expiration (Unix timestamp)
    exp: i64,
}

/// Signs and verifies bearer credentials with a shared secret.
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: u64,
}

impl JwtTokenCodec {
    /// Creates a codec whose credentials live for `ttl_secs`.
    pub fn new(secret: SecretString, ttl_secs: u64) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            ttl_secs,
        }
    }

    fn validation() -> Validation {
        let mut v = Validation::new(Algorithm::HS256);
        v.leeway = 0;
        v.set_required_spec_claims(&["exp"]);
        v
    }
}

impl std::fmt::Debug for JwtTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenCodec")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, email: &Email) -> Result<IssuedToken, AuthError> {
        let now = Timestamp::now();
        let claims = AccessClaims {
            email: email.as_str().to_string(),
            iat: now.as_unix_secs(),
            exp: now.plus_secs(self.ttl_secs).as_unix_secs(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl_secs,
        })
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &Self::validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        let claims = data.claims;
        let email = Email::new(claims.email).map_err(|_| AuthError::InvalidToken)?;
        let expires_at = Timestamp::from_unix_secs(claims.exp).ok_or(AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::new(email, expires_at))
    }
}

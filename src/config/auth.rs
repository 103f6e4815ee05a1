//! Credential configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

const MIN_PRODUCTION_SECRET_LEN: usize = 32;
const MAX_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Bearer credential settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify credentials
    pub access_token_secret: String,

    /// Credential lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    /// The signing secret, wrapped so it stays out of logs.
    pub fn signing_secret(&self) -> SecretString {
        SecretString::new(self.access_token_secret.clone())
    }

    /// Validate credential configuration
    ///
    /// Production additionally requires a secret of at least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.access_token_secret.is_empty() {
            return Err(ValidationError::MissingRequired("ACCESS_TOKEN_SECRET"));
        }
        if *environment == Environment::Production
            && self.access_token_secret.len() < MIN_PRODUCTION_SECRET_LEN
        {
            return Err(ValidationError::WeakTokenSecret(MIN_PRODUCTION_SECRET_LEN));
        }
        if self.token_ttl_secs == 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: String::new(),
            token_ttl_secs: default_token_ttl(),
        }
    }
}

fn default_token_ttl() -> u64 {
    3600
}

//! Configuration errors.
//!
//! Loading fails on malformed values; validation fails on values that parse
//! but cannot run the service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value the service cannot start with.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid listen address: {0}")]
    InvalidListenAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Access token secret must be at least {0} bytes in production")]
    WeakTokenSecret(usize),

    #[error("Token lifetime must be between 1 second and 1 day")]
    InvalidTokenTtl,

    #[error("Invalid Stripe API key format")]
    InvalidStripeKey,

    #[error("Currency must be a three-letter ISO code")]
    InvalidCurrency,

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Invalid notification email address")]
    InvalidNotifyEmail,
}

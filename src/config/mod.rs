//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `BISTRO_BOSS` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use bistro_boss::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod email;
mod error;
mod payment;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{CorsPolicy, Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection. Absent means the in-memory store.
    pub database: Option<DatabaseConfig>,

    /// Credential signing
    pub auth: AuthConfig,

    /// Payment configuration (Stripe)
    pub payment: PaymentConfig,

    /// Confirmation email (Mailgun). Absent means confirmations are only logged.
    pub email: Option<EmailConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BISTRO_BOSS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `BISTRO_BOSS__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `BISTRO_BOSS__AUTH__ACCESS_TOKEN_SECRET=...` -> `auth.access_token_secret = ...`
    ///
    /// A bare `PORT`, as set by most hosting platforms, is used when
    /// `BISTRO_BOSS__SERVER__PORT` is absent.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(port) = platform_port() {
            builder = builder.set_default("server.port", i64::from(port))?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("BISTRO_BOSS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.auth.validate(&self.server.environment)?;
        self.payment.validate()?;
        if let Some(email) = &self.email {
            email.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

fn platform_port() -> Option<u16> {
    std::env::var("PORT").ok()?.trim().parse().ok()
}

//! Email configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Mailgun)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Mailgun API key
    pub api_key: String,

    /// Mailgun sending domain
    pub domain: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// Copy of every confirmation goes here, if set
    pub notify_email: Option<String>,

    /// Override for the Mailgun API base URL (EU region, tests)
    pub api_base: Option<String>,
}

impl EmailConfig {
    pub fn api_key(&self) -> SecretString {
        SecretString::new(self.api_key.clone())
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL_API_KEY"));
        }
        if self.domain.is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL_DOMAIN"));
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if let Some(notify) = &self.notify_email {
            if !notify.contains('@') {
                return Err(ValidationError::InvalidNotifyEmail);
            }
        }
        Ok(())
    }
}

fn default_from_email() -> String {
    "orders@bistroboss.com".to_string()
}

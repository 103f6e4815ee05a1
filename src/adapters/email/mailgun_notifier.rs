//! Mailgun implementation of the `PaymentNotifier` port.
//!
//! Sends a fixed confirmation message through the Mailgun HTTP API
//! (`POST /v3/{domain}/messages`, basic auth `api:{key}`).

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::ordering::PaymentRecord;
use crate::ports::{NotificationError, PaymentNotifier};

const SUBJECT: &str = "Payment Confirmation";
const HTML_BODY: &str = "<h3>Your payment was successful</h3>\
<p>Enjoy the order, more details coming soon.</p>";

/// Mailgun configuration.
#[derive(Clone)]
pub struct MailgunConfig {
    api_key: SecretString,
    domain: String,
    from: String,
    /// Copy every confirmation to this address (the restaurant inbox).
    bcc: Option<String>,
    api_base_url: String,
}

impl MailgunConfig {
    pub fn new(api_key: SecretString, domain: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key,
            domain: domain.into(),
            from: from.into(),
            bcc: None,
            api_base_url: "https://api.mailgun.net/v3".to_string(),
        }
    }

    pub fn with_bcc(mut self, bcc: Option<String>) -> Self {
        self.bcc = bcc.filter(|b| !b.trim().is_empty());
        self
    }

    /// Set a custom API base URL (EU region or tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Sends payment confirmations via Mailgun.
pub struct MailgunNotifier {
    config: MailgunConfig,
    http_client: reqwest::Client,
}

impl MailgunNotifier {
    pub fn new(config: MailgunConfig) -> Result<Self, NotificationError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| NotificationError::Transport(e.to_string()))?;
        Ok(Self {
            config,
            http_client,
        })
    }

    fn message_form(&self, payment: &PaymentRecord) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("from", self.config.from.clone()),
            ("to", payment.email.to_string()),
            ("subject", SUBJECT.to_string()),
            (
                "text",
                format!("Payment Confirmed. Transaction: {}", payment.transaction_id),
            ),
            ("html", HTML_BODY.to_string()),
        ];
        if let Some(bcc) = &self.config.bcc {
            form.push(("bcc", bcc.clone()));
        }
        form
    }
}

#[async_trait]
impl PaymentNotifier for MailgunNotifier {
    async fn payment_confirmed(&self, payment: &PaymentRecord) -> Result<(), NotificationError> {
        let url = format!(
            "{}/{}/messages",
            self.config.api_base_url, self.config.domain
        );

        let response = self
            .http_client
            .post(&url)
            .basic_auth("api", Some(self.config.api_key.expose_secret()))
            .form(&self.message_form(payment))
            .send()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(payment_id = %payment.id, "Mailgun accepted confirmation");
        Ok(())
    }
}

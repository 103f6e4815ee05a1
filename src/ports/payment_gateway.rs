//! Payment gateway port for card payment intents.
//!
//! Defines the contract for creating a processor-side payment intent whose
//! client secret lets the browser complete the charge.
//!
//! # Design
//!
//! - **Gateway agnostic**: Interface works with any card processor
//! - **No retries**: A failed call is reported once; the client decides

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::ordering::OrderingError;

/// Port for card payment processors.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent for `amount` in `currency`.
    ///
    /// Callers must not pass a zero amount.
    async fn create_intent(
        &self,
        amount: Money,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError>;
}

/// Payment intent created by the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Processor's intent ID.
    pub id: String,

    /// Secret the client uses to confirm the payment.
    pub client_secret: String,

    /// Amount the intent was created for.
    pub amount: Money,
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Processor's error code (if available).
    pub provider_code: Option<String>,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create a card declined error.
    pub fn card_declined(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::CardDeclined, message)
    }

    /// Returns true if the customer's card was refused.
    pub fn is_decline(&self) -> bool {
        self.code.is_decline()
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

impl From<PaymentError> for OrderingError {
    fn from(err: PaymentError) -> Self {
        if err.is_decline() {
            OrderingError::PaymentDeclined(err.message)
        } else {
            OrderingError::PaymentGateway(err.to_string())
        }
    }
}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Card was declined.
    CardDeclined,

    /// Insufficient funds.
    InsufficientFunds,

    /// Card expired.
    CardExpired,

    /// The processor rejected the request parameters.
    InvalidRequest,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Any other processor failure.
    ProviderError,
}

impl PaymentErrorCode {
    /// Check if this error means the card itself was refused.
    pub fn is_decline(&self) -> bool {
        matches!(
            self,
            PaymentErrorCode::CardDeclined
                | PaymentErrorCode::InsufficientFunds
                | PaymentErrorCode::CardExpired
        )
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::CardDeclined => "card_declined",
            PaymentErrorCode::InsufficientFunds => "insufficient_funds",
            PaymentErrorCode::CardExpired => "card_expired",
            PaymentErrorCode::InvalidRequest => "invalid_request",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn decline_codes() {
        assert!(PaymentErrorCode::CardDeclined.is_decline());
        assert!(PaymentErrorCode::InsufficientFunds.is_decline());
        assert!(PaymentErrorCode::CardExpired.is_decline());

        assert!(!PaymentErrorCode::NetworkError.is_decline());
        assert!(!PaymentErrorCode::ProviderError.is_decline());
    }

    #[test]
    fn payment_error_display() {
        let err = PaymentError::card_declined("Your card was declined");
        assert!(err.to_string().contains("card_declined"));
        assert!(err.to_string().contains("Your card was declined"));
    }

    #[test]
    fn decline_maps_to_payment_declined() {
        let err: OrderingError = PaymentError::card_declined("no").into();
        assert!(matches!(err, OrderingError::PaymentDeclined(_)));
    }

    #[test]
    fn outage_maps_to_gateway_error() {
        let err: OrderingError = PaymentError::network("timeout").into();
        assert!(matches!(err, OrderingError::PaymentGateway(_)));
    }
}

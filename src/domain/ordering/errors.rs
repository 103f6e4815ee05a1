//! Ordering error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ValidationFailed | 400 |
//! | NotFound | 404 |
//! | PaymentDeclined | 402 |
//! | PaymentGateway | 502 |
//! | Persistence | 500 |
//! | CartClearFailed | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId, ValidationError};

/// Errors raised by ordering operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// Request data failed validation.
    ValidationFailed { field: String, message: String },

    /// A referenced resource does not exist.
    NotFound { resource: &'static str, id: String },

    /// The processor refused the card.
    PaymentDeclined(String),

    /// The processor could not be reached or returned an error.
    PaymentGateway(String),

    /// A store read or write failed. Nothing was changed by the failing step.
    Persistence(String),

    /// The payment was persisted but its cart entries could not be removed.
    CartClearFailed { payment_id: PaymentId, reason: String },
}

impl OrderingError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        OrderingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        OrderingError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        OrderingError::Persistence(message.into())
    }

    pub fn cart_clear_failed(payment_id: PaymentId, reason: impl Into<String>) -> Self {
        OrderingError::CartClearFailed {
            payment_id,
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            OrderingError::NotFound { .. } => ErrorCode::NotFound,
            OrderingError::PaymentDeclined(_) => ErrorCode::PaymentRequired,
            OrderingError::PaymentGateway(_) => ErrorCode::ExternalServiceError,
            OrderingError::Persistence(_) | OrderingError::CartClearFailed { .. } => {
                ErrorCode::DatabaseError
            }
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            OrderingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            OrderingError::NotFound { resource, id } => format!("{} not found: {}", resource, id),
            OrderingError::PaymentDeclined(reason) => format!("Payment declined: {}", reason),
            OrderingError::PaymentGateway(reason) => {
                format!("Payment provider error: {}", reason)
            }
            OrderingError::Persistence(_) => "Failed to access the data store".to_string(),
            OrderingError::CartClearFailed { payment_id, .. } => format!(
                "Payment {} was recorded but the cart could not be cleared",
                payment_id
            ),
        }
    }
}

impl std::fmt::Display for OrderingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderingError::Persistence(detail) => write!(f, "persistence error: {}", detail),
            OrderingError::CartClearFailed { payment_id, reason } => {
                write!(f, "cart clear failed for payment {}: {}", payment_id, reason)
            }
            other => write!(f, "{}", other.message()),
        }
    }
}

impl std::error::Error for OrderingError {}

impl From<ValidationError> for OrderingError {
    fn from(err: ValidationError) -> Self {
        OrderingError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for OrderingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => OrderingError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::NotFound => OrderingError::NotFound {
                resource: "resource",
                id: err.message,
            },
            _ => OrderingError::Persistence(err.to_string()),
        }
    }
}

impl From<OrderingError> for DomainError {
    fn from(err: OrderingError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            OrderingError::CartClearFailed { payment_id, .. } => {
                domain.with_detail("paymentId", payment_id.to_string())
            }
            _ => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_categories() {
        assert_eq!(
            OrderingError::validation("price", "bad").code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            OrderingError::not_found("Menu item", "x").code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            OrderingError::PaymentDeclined("card".into()).code(),
            ErrorCode::PaymentRequired
        );
        assert_eq!(
            OrderingError::PaymentGateway("down".into()).code(),
            ErrorCode::ExternalServiceError
        );
        assert_eq!(
            OrderingError::persistence("io").code(),
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn persistence_message_hides_detail() {
        let err = OrderingError::persistence("password authentication failed");
        assert!(!err.message().contains("password"));
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn cart_clear_failed_carries_payment_id() {
        let id = PaymentId::new();
        let err = OrderingError::cart_clear_failed(id, "timeout");
        assert!(err.message().contains(&id.to_string()));
        let domain: DomainError = err.into();
        assert_eq!(domain.details.get("paymentId"), Some(&id.to_string()));
    }

    #[test]
    fn database_domain_error_becomes_persistence() {
        let err: OrderingError = DomainError::database("connection refused").into();
        assert!(matches!(err, OrderingError::Persistence(_)));
    }

    #[test]
    fn validation_error_keeps_field() {
        let err: OrderingError = ValidationError::empty_field("transactionId").into();
        assert!(matches!(
            err,
            OrderingError::ValidationFailed { ref field, .. } if field == "transactionId"
        ));
    }
}

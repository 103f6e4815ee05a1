//! HTTP error mapping.
//!
//! Every failure leaves the API as `{error: true, code, message}`. Access
//! failures collapse to the two fixed messages clients already check for;
//! the finer reason only reaches the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::GateError;
use crate::domain::foundation::{AuthError, ErrorCode, ValidationError};
use crate::domain::ordering::OrderingError;

pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized access";
pub const FORBIDDEN_MESSAGE: &str = "forbidden access";

/// JSON body for error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: true,
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// API error type that converts gate and domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Gate(GateError),
    Ordering(OrderingError),
}

impl From<GateError> for ApiError {
    fn from(err: GateError) -> Self {
        ApiError::Gate(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Gate(GateError::Denied(err))
    }
}

impl From<OrderingError> for ApiError {
    fn from(err: OrderingError) -> Self {
        ApiError::Ordering(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Ordering(err.into())
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
        ErrorCode::ExternalServiceError => StatusCode::BAD_GATEWAY,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn denied_response(reason: &AuthError) -> (StatusCode, ErrorResponse) {
    if reason.is_unauthenticated() {
        (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(ErrorCode::Unauthorized.to_string(), UNAUTHORIZED_MESSAGE),
        )
    } else if reason.is_forbidden() {
        (
            StatusCode::FORBIDDEN,
            ErrorResponse::new(ErrorCode::Forbidden.to_string(), FORBIDDEN_MESSAGE),
        )
    } else {
        tracing::error!(error = %reason, "Credential handling failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(ErrorCode::InternalError.to_string(), "Failed to issue credential"),
        )
    }
}

fn ordering_response(err: &OrderingError) -> (StatusCode, ErrorResponse) {
    let code = err.code();
    let status = status_for(code);
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    }

    let body = ErrorResponse::new(code.to_string(), err.message());
    let body = match err {
        OrderingError::CartClearFailed { payment_id, .. } => {
            body.with_details(serde_json::json!({ "paymentId": payment_id }))
        }
        OrderingError::ValidationFailed { field, .. } => {
            body.with_details(serde_json::json!({ "field": field }))
        }
        _ => body,
    };
    (status, body)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Gate(GateError::Denied(reason)) => denied_response(reason),
            ApiError::Gate(GateError::Store(err)) => {
                ordering_response(&OrderingError::persistence(err.to_string()))
            }
            ApiError::Ordering(err) => ordering_response(err),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, PaymentId};

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn credential_failures_are_401() {
        assert_eq!(status_of(AuthError::MissingCredential.into()), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::InvalidToken.into()), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::TokenExpired.into()), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn role_and_subject_failures_are_403() {
        assert_eq!(status_of(AuthError::InsufficientRole.into()), StatusCode::FORBIDDEN);
        assert_eq!(status_of(AuthError::IdentityMismatch.into()), StatusCode::FORBIDDEN);
    }

    #[test]
    fn role_lookup_failure_is_500() {
        let err = ApiError::Gate(GateError::Store(DomainError::database("down")));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn ordering_errors_map_to_statuses() {
        assert_eq!(
            status_of(OrderingError::validation("price", "bad").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(OrderingError::not_found("User", "x").into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(OrderingError::PaymentDeclined("card".into()).into()),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            status_of(OrderingError::PaymentGateway("down".into()).into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(OrderingError::cart_clear_failed(PaymentId::new(), "x").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn forbidden_body_uses_fixed_message() {
        let (_, body) = denied_response(&AuthError::IdentityMismatch);
        assert!(body.error);
        assert_eq!(body.message, FORBIDDEN_MESSAGE);
        assert_eq!(body.code, "FORBIDDEN");
    }

    #[test]
    fn cart_clear_failure_reports_payment_id() {
        let id = PaymentId::new();
        let (_, body) = ordering_response(&OrderingError::cart_clear_failed(id, "timeout"));
        let details = body.details.unwrap();
        assert_eq!(details["paymentId"], id.to_string());
    }
}

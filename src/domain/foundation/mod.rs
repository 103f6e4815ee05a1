//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the ordering domain.

mod auth;
mod errors;
mod ids;
mod money;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CartItemId, Email, MenuItemId, PaymentId, ReviewId, UserId};
pub use money::Money;
pub use timestamp::Timestamp;

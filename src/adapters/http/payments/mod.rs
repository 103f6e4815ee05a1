//! HTTP adapter for payments. Mounted behind `require_auth`.
//!
//! - `POST /create-payment-intent` - Start a card payment
//! - `POST /payments` - Record a completed payment and clear its cart

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::payment_routes;

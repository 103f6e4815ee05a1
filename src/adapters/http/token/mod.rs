//! HTTP adapter for credential issuance.
//!
//! - `POST /jwt` - Issue a bearer credential for an email

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::token_routes;

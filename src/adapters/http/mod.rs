//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with DTOs, handlers and routes. The
//! authorization gate runs as middleware in front of every protected group.

pub mod cart;
pub mod catalog;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod payments;
pub mod router;
pub mod state;
pub mod stats;
pub mod token;
pub mod users;

pub use error::{ApiError, ErrorResponse};
pub use router::api_router;
pub use state::AppState;

//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! The authorization gate runs ahead of every protected handler.

pub mod gate;
pub mod handlers;

pub use gate::{AuthorizationGate, GateError};

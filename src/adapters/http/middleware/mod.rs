//! HTTP middleware for axum.
//!
//! - `auth` - Authorization gate layers and the caller extractor

pub mod auth;

pub use auth::{require_admin, require_auth, RequireAuth};

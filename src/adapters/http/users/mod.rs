//! HTTP adapter for user endpoints.
//!
//! - `POST /users` - Register on first sign-in (public)
//! - `GET /users/admin/:email` - Is the caller an admin (authenticated)
//! - `GET /users` - List users (admin)
//! - `PATCH /users/admin/:id` - Promote a user to admin (admin)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{user_admin_routes, user_authenticated_routes, user_public_routes};

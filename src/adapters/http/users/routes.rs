//! Routes for user endpoints, split by the access each group needs.
//!
//! The `GET` and `PATCH` admin routes share one path pattern; the segment
//! is an email for `GET` and a user id for `PATCH`.

use axum::routing::{get, patch, post};
use axum::Router;

use super::handlers::{check_admin, list_users, promote_to_admin, register_user};
use crate::adapters::http::state::AppState;

pub fn user_public_routes() -> Router<AppState> {
    Router::new().route("/users", post(register_user))
}

pub fn user_authenticated_routes() -> Router<AppState> {
    Router::new().route("/users/admin/:id", get(check_admin))
}

pub fn user_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/admin/:id", patch(promote_to_admin))
}

//! Routes for payment endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{commit_payment, create_payment_intent};
use crate::adapters::http::state::AppState;

pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/payments", post(commit_payment))
}

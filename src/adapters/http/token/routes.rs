//! Routes for credential issuance.

use axum::routing::post;
use axum::Router;

use super::handlers::issue_token;
use crate::adapters::http::state::AppState;

/// Public; a credential is how callers get past the gate.
pub fn token_routes() -> Router<AppState> {
    Router::new().route("/jwt", post(issue_token))
}

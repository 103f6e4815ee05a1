//! Top-level router.
//!
//! Routes are grouped by the access they need. Each group carries its own
//! gate layer via `route_layer`, so unmatched paths still fall through to
//! a plain 404 rather than a 401.

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;

use super::cart::cart_routes;
use super::catalog::{catalog_admin_routes, catalog_public_routes};
use super::middleware::{require_admin, require_auth};
use super::payments::payment_routes;
use super::state::AppState;
use super::stats::stats_routes;
use super::token::token_routes;
use super::users::{user_admin_routes, user_authenticated_routes, user_public_routes};

/// GET / - Liveness probe
async fn health() -> &'static str {
    "Bistro Boss Server is running"
}

/// Builds the full API router with its state applied.
pub fn api_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(health))
        .merge(token_routes())
        .merge(user_public_routes())
        .merge(catalog_public_routes());

    let authenticated = Router::new()
        .merge(user_authenticated_routes())
        .merge(cart_routes())
        .merge(payment_routes())
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let admin = Router::new()
        .merge(user_admin_routes())
        .merge(catalog_admin_routes())
        .merge(stats_routes())
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    public.merge(authenticated).merge(admin).with_state(state)
}

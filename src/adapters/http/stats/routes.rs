//! Routes for dashboard statistics.

use axum::routing::get;
use axum::Router;

use super::handlers::{admin_stats, order_stats};
use crate::adapters::http::state::AppState;

pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/admin-stats", get(admin_stats))
        .route("/order-stats", get(order_stats))
}

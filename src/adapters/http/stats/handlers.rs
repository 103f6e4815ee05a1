//! HTTP handlers for dashboard statistics.
//!
//! Both handlers serialize the domain read models directly; their field
//! names already match the wire format.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::stats::{GetAdminStatsQuery, GetOrderStatsQuery};

/// GET /admin-stats
pub async fn admin_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.admin_stats_handler().handle(GetAdminStatsQuery).await?;
    Ok(Json(stats))
}

/// GET /order-stats
pub async fn order_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.order_stats_handler().handle(GetOrderStatsQuery).await?;
    Ok(Json(stats))
}

//! Routes for cart endpoints. Mounted behind `require_auth`.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{add_to_cart, list_cart, remove_cart_entry};
use crate::adapters::http::state::AppState;

pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", post(add_to_cart))
        .route("/carts", get(list_cart))
        .route("/carts/:id", delete(remove_cart_entry))
}

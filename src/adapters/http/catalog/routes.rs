//! Routes for catalog endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{add_menu_item, delete_menu_item, list_menu, list_reviews};
use crate::adapters::http::state::AppState;

pub fn catalog_public_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", get(list_menu))
        .route("/reviews", get(list_reviews))
}

pub fn catalog_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", post(add_menu_item))
        .route("/menu/:id", delete(delete_menu_item))
}

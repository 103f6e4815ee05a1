//! HTTP handlers for catalog endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use super::dto::{AddMenuItemRequest, MenuItemResponse, ReviewResponse};
use crate::adapters::http::dto::{DeleteResult, InsertResult};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::catalog::{
    AddMenuItemCommand, DeleteMenuItemCommand, ListMenuQuery, ListReviewsQuery,
};
use crate::domain::foundation::MenuItemId;

/// GET /menu
pub async fn list_menu(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = state.list_menu_handler().handle(ListMenuQuery).await?;
    let body: Vec<MenuItemResponse> = items.into_iter().map(MenuItemResponse::from).collect();
    Ok(Json(body))
}

/// GET /reviews
pub async fn list_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let reviews = state.list_reviews_handler().handle(ListReviewsQuery).await?;
    let body: Vec<ReviewResponse> = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(Json(body))
}

/// POST /menu - Add a menu item (admin)
pub async fn add_menu_item(
    State(state): State<AppState>,
    Json(request): Json<AddMenuItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = AddMenuItemCommand {
        name: request.name,
        recipe: request.recipe,
        image: request.image,
        category: request.category,
        price: request.price,
    };
    let item = state.add_menu_item_handler().handle(cmd).await?;

    Ok(Json(InsertResult::new(item.id)))
}

/// DELETE /menu/:id - Remove a menu item (admin)
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: MenuItemId = id.parse()?;
    let deleted = state
        .delete_menu_item_handler()
        .handle(DeleteMenuItemCommand { id })
        .await?;

    Ok(Json(DeleteResult::new(deleted)))
}

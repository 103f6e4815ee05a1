//! HTTP handlers for cart endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::response::IntoResponse;

use super::dto::{AddToCartRequest, CartEntryResponse, CartQuery};
use crate::adapters::http::dto::{DeleteResult, InsertResult};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::cart::{
    AddToCartCommand, ListCartQuery, RemoveCartEntryCommand,
};
use crate::domain::access::AccessRequirement;
use crate::domain::foundation::{AuthError, CartItemId, Email};

/// POST /cart - Add an entry; the body email must be the caller's
pub async fn add_to_cart(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<AddToCartRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .gate
        .authorize(&caller, &AccessRequirement::Subject(request.email.clone()))
        .await?;

    let cmd = AddToCartCommand {
        email: request.email,
        menu_item_id: request.menu_item_id,
        name: request.name,
        image: request.image,
        price: request.price,
    };
    let entry = state.add_to_cart_handler().handle(cmd).await?;

    Ok(Json(InsertResult::new(entry.id)))
}

/// GET /carts?email= - The caller's cart; no email yields an empty list
pub async fn list_cart(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Query(query): Query<CartQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(raw) = query.email.filter(|e| !e.trim().is_empty()) else {
        return Ok(Json(Vec::<CartEntryResponse>::new()));
    };

    let email = Email::new(raw).map_err(|_| AuthError::IdentityMismatch)?;
    state
        .gate
        .authorize(&caller, &AccessRequirement::Subject(email.clone()))
        .await?;

    let entries = state.list_cart_handler().handle(ListCartQuery { email }).await?;
    let body: Vec<CartEntryResponse> = entries.into_iter().map(CartEntryResponse::from).collect();
    Ok(Json(body))
}

/// DELETE /carts/:id - Remove an entry if the caller owns it
///
/// Another user's entry is left alone and reported as zero deletions.
pub async fn remove_cart_entry(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CartItemId = id.parse()?;
    let removed = state
        .remove_cart_entry_handler()
        .handle(RemoveCartEntryCommand {
            id,
            owner: caller.email,
        })
        .await?;

    Ok(Json(DeleteResult::new(removed)))
}

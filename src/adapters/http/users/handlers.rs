//! HTTP handlers for user endpoints.

use axum::extract::{Json, Path, State};
use axum::response::{IntoResponse, Response};

use super::dto::{AdminStatusResponse, MessageResponse, RegisterUserRequest, UserResponse};
use crate::adapters::http::dto::{InsertResult, UpdateResult};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::users::{
    CheckAdminQuery, ListUsersQuery, PromoteToAdminCommand, RegisterUserCommand,
    RegisterUserResult,
};
use crate::domain::foundation::{Email, UserId};

/// POST /users - Register a user unless the email is taken
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<Response, ApiError> {
    let handler = state.register_user_handler();
    let cmd = RegisterUserCommand {
        name: request.name,
        email: request.email,
    };

    let response = match handler.handle(cmd).await? {
        RegisterUserResult::Created(user) => Json(InsertResult::new(user.id)).into_response(),
        RegisterUserResult::AlreadyExists => Json(MessageResponse {
            message: "User already exist".to_string(),
        })
        .into_response(),
    };
    Ok(response)
}

/// GET /users - List every user (admin)
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.list_users_handler().handle(ListUsersQuery).await?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(body))
}

/// GET /users/admin/:email - Whether the caller is an admin
///
/// Asking about any other identity answers `false` rather than 403.
pub async fn check_admin(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    // An unparseable address can never be the caller's own.
    let admin = match Email::new(email) {
        Ok(email) => {
            state
                .check_admin_handler()
                .handle(CheckAdminQuery { caller, email })
                .await?
        }
        Err(_) => false,
    };

    Ok(Json(AdminStatusResponse { admin }))
}

/// PATCH /users/admin/:id - Grant the admin role (admin)
pub async fn promote_to_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = id.parse()?;
    state
        .promote_to_admin_handler()
        .handle(PromoteToAdminCommand { user_id })
        .await?;

    Ok(Json(UpdateResult::new(1)))
}

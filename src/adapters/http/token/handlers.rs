//! HTTP handlers for credential issuance.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use super::dto::{IssueTokenRequest, IssueTokenResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::auth::IssueTokenCommand;

/// POST /jwt - Issue a bearer credential valid for the configured lifetime
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<IssueTokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.issue_token_handler();
    let result = handler.handle(IssueTokenCommand {
        email: request.email,
    })?;

    Ok(Json(IssueTokenResponse {
        token: result.token,
    }))
}

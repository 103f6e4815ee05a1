//! Authorization gate middleware and extractors for axum.
//!
//! - `require_auth` - Rejects requests without a valid bearer credential
//! - `require_admin` - Additionally requires the stored admin role
//! - `RequireAuth` - Extractor for the caller injected by either layer
//!
//! ```text
//! Request → require_auth/require_admin → injects AuthenticatedUser into extensions
//!                                               ↓
//!                                       Handler → RequireAuth extractor reads it
//! ```
//!
//! The gate halts the request before any handler runs, so a refused call
//! never reaches a store.

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::access::AccessRequirement;
use crate::domain::foundation::{AuthError, AuthenticatedUser};

async fn gate_request(
    state: &AppState,
    requirement: AccessRequirement,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match state.gate.check(header, &requirement).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Requires any valid bearer credential.
pub async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    gate_request(&state, AccessRequirement::Authenticated, request, next).await
}

/// Requires a valid credential whose stored user has the admin role.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    gate_request(&state, AccessRequirement::Admin, request, next).await
}

/// Extractor for the authenticated caller.
///
/// Only valid behind `require_auth` or `require_admin`; without them the
/// request is rejected as unauthenticated.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or_else(|| AuthError::MissingCredential.into())
    }
}

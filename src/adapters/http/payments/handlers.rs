//! HTTP handlers for payment endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use super::dto::{
    CommitPaymentRequest, CommitPaymentResponse, CreatePaymentIntentRequest,
    CreatePaymentIntentResponse,
};
use crate::adapters::http::dto::{DeleteResult, InsertResult};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::payment::{CommitPaymentCommand, CreatePaymentIntentCommand};
use crate::domain::access::AccessRequirement;

/// POST /create-payment-intent - Returns the processor's client secret
pub async fn create_payment_intent(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
    Json(request): Json<CreatePaymentIntentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreatePaymentIntentCommand {
        price: request.price,
        currency: state.currency.clone(),
    };
    let result = state.create_payment_intent_handler().handle(cmd).await?;

    Ok(Json(CreatePaymentIntentResponse {
        client_secret: result.client_secret,
    }))
}

/// POST /payments - Record a payment and remove the paid cart entries
///
/// A payment may only be recorded for the caller's own email.
pub async fn commit_payment(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<CommitPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payer = match request.email.clone() {
        Some(email) => {
            state
                .gate
                .authorize(&caller, &AccessRequirement::Subject(email.clone()))
                .await?;
            email
        }
        None => caller.email.clone(),
    };

    let payment = request.into_record(payer, &state.currency);
    let result = state
        .commit_payment_handler()
        .handle(CommitPaymentCommand { payment })
        .await?;

    Ok(Json(CommitPaymentResponse {
        insert_result: InsertResult::new(result.payment_id),
        delete_result: DeleteResult::new(result.removed_count),
    }))
}

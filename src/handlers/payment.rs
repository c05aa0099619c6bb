use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::models::AppState;
use crate::services::payment::PaymentReceipt;

/// Request payload for confirming a payment; `bookingId` is not interpreted
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    pub booking_id: Option<Value>,
    pub method: Option<String>,
}

/// Confirms payment for a booking.
///
/// POST /api/payment/confirm ConfirmPaymentRequest
///
/// Delegates to the configured payment gateway, which is currently a stub that
/// always succeeds.
#[instrument(
    skip_all,
    fields(
        user_id = %user.user_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn confirm_payment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<ConfirmPaymentRequest>, JsonRejection>,
) -> AppResult<Json<PaymentReceipt>> {
    let Json(payload) = payload?;
    debug!(booking_id = ?payload.booking_id, "Processing payment confirmation");

    let receipt = state
        .payment_gateway
        .confirm(payload.booking_id, payload.method)
        .await?;
    Ok(Json(receipt))
}

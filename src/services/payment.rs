//! # Payment Service
//!
//! Payment confirmation sits behind the [`PaymentGateway`] trait so a real
//! provider can be plugged in later. The only implementation today is
//! [`StubPayment`], which accepts every request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, instrument};

use crate::utils::constant::DEFAULT_PAYMENT_METHOD;

/// Errors a payment provider may report
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment declined: {0}")]
    Declined(String),
}

/// Outcome of a confirmed payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub ok: bool,
    /// Echoed exactly as the client sent it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<Value>,
    pub method: String,
}

/// Trait for payment providers
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Confirms payment for a booking. `method` falls back to [`DEFAULT_PAYMENT_METHOD`].
    async fn confirm(
        &self,
        booking_id: Option<Value>,
        method: Option<String>,
    ) -> Result<PaymentReceipt, PaymentError>;
}

/// Placeholder gateway that approves every payment without contacting anyone.
pub struct StubPayment;

#[async_trait]
impl PaymentGateway for StubPayment {
    #[instrument(skip(self))]
    async fn confirm(
        &self,
        booking_id: Option<Value>,
        method: Option<String>,
    ) -> Result<PaymentReceipt, PaymentError> {
        let method = method
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string());
        info!(%method, "Stub payment confirmed");

        Ok(PaymentReceipt {
            ok: true,
            booking_id,
            method,
        })
    }
}

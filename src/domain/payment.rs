use super::method::PaymentMethod;
use crate::error::PaymentError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Message carried by failures raised inside the orchestrator itself.
pub const INTERNAL_FAILURE_MESSAGE: &str = "Payment processing failed";

/// Method-specific data handed back to the client after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum PaymentPayload {
    /// Hosted checkout session.
    Checkout {
        checkout_url: String,
        checkout_id: String,
        total: String,
        currency: String,
    },
    /// Buy-now-pay-later session with its installment plan.
    Financing {
        checkout_url: String,
        session_id: String,
        installments: Option<serde_json::Value>,
    },
    /// Address the customer should pay into.
    CryptoInvoice {
        wallet_address: String,
        amount: Decimal,
        currency: String,
        reference: Uuid,
        qr_code: String,
        expires_in_ms: u64,
    },
    ApplePay(ApplePayManifest),
    GooglePay(GooglePayManifest),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayManifest {
    pub merchant_id: Option<String>,
    pub supported_networks: Vec<String>,
    pub merchant_capabilities: Vec<String>,
    pub total: ApplePayTotal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplePayTotal {
    pub label: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GooglePayEnvironment {
    #[default]
    Test,
    Production,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayManifest {
    pub merchant_id: Option<String>,
    pub environment: GooglePayEnvironment,
    pub allowed_payment_methods: Vec<GooglePayMethod>,
    pub transaction_info: GooglePayTransactionInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GooglePayMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub parameters: GooglePayCardParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayCardParameters {
    pub allowed_auth_methods: Vec<String>,
    pub allowed_card_networks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayTransactionInfo {
    pub total_price: String,
    pub total_price_status: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSuccess {
    /// The integration that actually produced the payload.
    pub method: PaymentMethod,
    pub payload: PaymentPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentFailure {
    pub error: String,
    /// Alternative suggested by the failing integration.
    pub fallback: Option<PaymentMethod>,
    pub details: Option<String>,
}

impl PaymentFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fallback: None,
            details: None,
        }
    }

    pub fn with_fallback(mut self, fallback: PaymentMethod) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Generic failure for faults inside the orchestrator; the diagnostic goes in `details`.
    pub fn internal(err: &PaymentError) -> Self {
        Self {
            error: INTERNAL_FAILURE_MESSAGE.to_string(),
            fallback: None,
            details: Some(err.to_string()),
        }
    }
}

/// Normalized outcome of a single provider submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentResult {
    Success(PaymentSuccess),
    Failure(PaymentFailure),
}

impl PaymentResult {
    pub fn success(method: PaymentMethod, payload: PaymentPayload) -> Self {
        PaymentResult::Success(PaymentSuccess { method, payload })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentResult::Success(_))
    }
}

impl From<PaymentFailure> for PaymentResult {
    fn from(failure: PaymentFailure) -> Self {
        PaymentResult::Failure(failure)
    }
}

/// The final, client-facing answer of one orchestration call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestrationOutcome {
    #[serde(flatten)]
    pub result: PaymentResult,
    /// First choice of the scorer, even when a fallback produced `result`.
    pub selected_method: PaymentMethod,
    pub transaction_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl OrchestrationOutcome {
    /// Stamps `result` with a fresh transaction id and the current time.
    pub fn new(selected_method: PaymentMethod, result: PaymentResult) -> Self {
        Self {
            result,
            selected_method,
            transaction_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }
}

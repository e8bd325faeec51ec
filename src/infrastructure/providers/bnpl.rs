use crate::domain::method::PaymentMethod;
use crate::domain::order::{LineItem, OrderData};
use crate::domain::payment::{PaymentFailure, PaymentPayload, PaymentResult};
use crate::domain::ports::PaymentProcessor;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionRequest<'a> {
    /// Minor units.
    amount: i64,
    currency: &'a str,
    customer: SessionCustomer<'a>,
    items: &'a [LineItem],
    #[serde(skip_serializing_if = "Option::is_none")]
    success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cancel_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct SessionCustomer<'a> {
    email: &'a str,
    phone: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    checkout_url: String,
    session_id: String,
    #[serde(default)]
    installment_plan: Option<serde_json::Value>,
}

/// Opens buy-now-pay-later sessions. Failures suggest `shopify` as the fallback.
pub struct BnplProcessor {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    frontend_url: Option<String>,
}

impl BnplProcessor {
    pub fn new(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: Option<String>,
        frontend_url: Option<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
            frontend_url,
        }
    }

    fn redirect_url(&self, outcome: &str) -> Option<String> {
        self.frontend_url
            .as_deref()
            .map(|base| format!("{}/payment/{outcome}", base.trim_end_matches('/')))
    }

    fn session_request<'a>(&self, order: &'a OrderData) -> Result<SessionRequest<'a>> {
        let amount = order.total_minor_units().ok_or_else(|| {
            PaymentError::ValidationError(format!("order total {} is out of range", order.total))
        })?;
        Ok(SessionRequest {
            amount,
            currency: &order.currency,
            customer: SessionCustomer {
                email: &order.customer_email,
                phone: order.phone.as_deref(),
            },
            items: &order.items,
            success_url: self.redirect_url("success"),
            cancel_url: self.redirect_url("cancel"),
        })
    }

    async fn open_session(&self, order: &OrderData) -> Result<PaymentPayload> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            PaymentError::ProviderError("BNPL_API_KEY is not set".to_string())
        })?;
        let request = self.session_request(order)?;

        let response: SessionResponse = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(PaymentPayload::Financing {
            checkout_url: response.checkout_url,
            session_id: response.session_id,
            installments: response.installment_plan,
        })
    }
}

#[async_trait]
impl PaymentProcessor for BnplProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Bnpl
    }

    async fn submit(&self, order: &OrderData) -> PaymentResult {
        match self.open_session(order).await {
            Ok(payload) => PaymentResult::success(PaymentMethod::Bnpl, payload),
            Err(err) => {
                warn!(error = %err, "bnpl session creation failed");
                PaymentFailure::new(err.to_string())
                    .with_fallback(PaymentMethod::Shopify)
                    .into()
            }
        }
    }

    fn timeout_fallback(&self) -> Option<PaymentMethod> {
        Some(PaymentMethod::Shopify)
    }
}

use crate::domain::method::PaymentMethod;
use crate::domain::order::{Address, OrderData, VariantId};
use crate::domain::payment::{PaymentFailure, PaymentPayload, PaymentResult};
use crate::domain::ports::PaymentProcessor;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const API_VERSION: &str = "2024-10";
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

#[derive(Debug, Serialize)]
struct CheckoutRequest<'a> {
    checkout: CheckoutDraft<'a>,
}

#[derive(Debug, Serialize)]
struct CheckoutDraft<'a> {
    line_items: Vec<CheckoutLineItem<'a>>,
    email: &'a str,
    shipping_address: Option<&'a Address>,
    billing_address: Option<&'a Address>,
}

#[derive(Debug, Serialize)]
struct CheckoutLineItem<'a> {
    variant_id: &'a VariantId,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct CheckoutResponse {
    checkout: CreatedCheckout,
}

#[derive(Debug, Deserialize)]
struct CreatedCheckout {
    web_url: String,
    id: serde_json::Value,
    total_price: serde_json::Value,
    currency: String,
}

/// Creates hosted checkouts through the Shopify Admin API.
///
/// Any failure suggests `bnpl` as the fallback.
pub struct ShopifyProcessor {
    client: reqwest::Client,
    store_url: Option<String>,
    access_token: Option<String>,
}

impl ShopifyProcessor {
    pub fn new(
        client: reqwest::Client,
        store_url: Option<String>,
        access_token: Option<String>,
    ) -> Self {
        Self {
            client,
            store_url,
            access_token,
        }
    }

    fn checkout_endpoint(&self) -> Result<String> {
        let store_url = self.store_url.as_deref().ok_or_else(|| {
            PaymentError::ProviderError("SHOPIFY_STORE_URL is not set".to_string())
        })?;
        Ok(format!(
            "{}/admin/api/{API_VERSION}/checkouts.json",
            store_url.trim_end_matches('/')
        ))
    }

    fn checkout_request(order: &OrderData) -> CheckoutRequest<'_> {
        CheckoutRequest {
            checkout: CheckoutDraft {
                line_items: order
                    .items
                    .iter()
                    .map(|item| CheckoutLineItem {
                        variant_id: &item.variant_id,
                        quantity: item.quantity,
                    })
                    .collect(),
                email: &order.customer_email,
                shipping_address: order.shipping_address.as_ref(),
                billing_address: order.billing_address.as_ref(),
            },
        }
    }

    async fn create_checkout(&self, order: &OrderData) -> Result<PaymentPayload> {
        let endpoint = self.checkout_endpoint()?;
        let token = self.access_token.as_deref().ok_or_else(|| {
            PaymentError::ProviderError("SHOPIFY_API_KEY is not set".to_string())
        })?;

        let response: CheckoutResponse = self
            .client
            .post(endpoint)
            .header(ACCESS_TOKEN_HEADER, token)
            .json(&Self::checkout_request(order))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let checkout = response.checkout;
        Ok(PaymentPayload::Checkout {
            checkout_url: checkout.web_url,
            checkout_id: plain_string(&checkout.id),
            total: plain_string(&checkout.total_price),
            currency: checkout.currency,
        })
    }
}

// Shopify returns some fields as numbers and some as strings depending on the API version.
fn plain_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl PaymentProcessor for ShopifyProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Shopify
    }

    async fn submit(&self, order: &OrderData) -> PaymentResult {
        match self.create_checkout(order).await {
            Ok(payload) => PaymentResult::success(PaymentMethod::Shopify, payload),
            Err(err) => {
                warn!(error = %err, "shopify checkout creation failed");
                PaymentFailure::new(err.to_string())
                    .with_fallback(PaymentMethod::Bnpl)
                    .into()
            }
        }
    }

    fn timeout_fallback(&self) -> Option<PaymentMethod> {
        Some(PaymentMethod::Bnpl)
    }
}

use crate::domain::method::PaymentMethod;
use crate::domain::order::OrderData;
use crate::domain::payment::{ApplePayManifest, ApplePayTotal, PaymentPayload, PaymentResult};
use crate::domain::ports::PaymentProcessor;
use async_trait::async_trait;

pub const SUPPORTED_NETWORKS: [&str; 3] = ["visa", "masterCard", "amex"];
pub const MERCHANT_CAPABILITIES: [&str; 1] = ["supports3DS"];

/// Builds the Apple Pay payment request the client presents on the device.
pub struct ApplePayProcessor {
    merchant_id: Option<String>,
    display_name: String,
}

impl ApplePayProcessor {
    pub fn new(merchant_id: Option<String>, display_name: impl Into<String>) -> Self {
        Self {
            merchant_id,
            display_name: display_name.into(),
        }
    }

    fn manifest(&self, order: &OrderData) -> ApplePayManifest {
        ApplePayManifest {
            merchant_id: self.merchant_id.clone(),
            supported_networks: SUPPORTED_NETWORKS.map(String::from).to_vec(),
            merchant_capabilities: MERCHANT_CAPABILITIES.map(String::from).to_vec(),
            total: ApplePayTotal {
                label: self.display_name.clone(),
                amount: order.total.to_string(),
                kind: "final".to_string(),
            },
        }
    }
}

#[async_trait]
impl PaymentProcessor for ApplePayProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::ApplePay
    }

    async fn submit(&self, order: &OrderData) -> PaymentResult {
        PaymentResult::success(
            PaymentMethod::ApplePay,
            PaymentPayload::ApplePay(self.manifest(order)),
        )
    }
}

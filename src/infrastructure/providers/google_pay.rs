use crate::domain::method::PaymentMethod;
use crate::domain::order::OrderData;
use crate::domain::payment::{
    GooglePayCardParameters, GooglePayEnvironment, GooglePayManifest, GooglePayMethod,
    GooglePayTransactionInfo, PaymentPayload, PaymentResult,
};
use crate::domain::ports::PaymentProcessor;
use async_trait::async_trait;

pub const AUTH_METHODS: [&str; 2] = ["PAN_ONLY", "CRYPTOGRAM_3DS"];
pub const CARD_NETWORKS: [&str; 3] = ["VISA", "MASTERCARD", "AMEX"];

/// Builds the Google Pay `PaymentDataRequest` fragment for the client.
pub struct GooglePayProcessor {
    merchant_id: Option<String>,
    environment: GooglePayEnvironment,
}

impl GooglePayProcessor {
    pub fn new(merchant_id: Option<String>, environment: GooglePayEnvironment) -> Self {
        Self {
            merchant_id,
            environment,
        }
    }

    fn manifest(&self, order: &OrderData) -> GooglePayManifest {
        GooglePayManifest {
            merchant_id: self.merchant_id.clone(),
            environment: self.environment,
            allowed_payment_methods: vec![GooglePayMethod {
                kind: "CARD".to_string(),
                parameters: GooglePayCardParameters {
                    allowed_auth_methods: AUTH_METHODS.map(String::from).to_vec(),
                    allowed_card_networks: CARD_NETWORKS.map(String::from).to_vec(),
                },
            }],
            transaction_info: GooglePayTransactionInfo {
                total_price: order.total.to_string(),
                total_price_status: "FINAL".to_string(),
                currency_code: order.currency.clone(),
            },
        }
    }
}

#[async_trait]
impl PaymentProcessor for GooglePayProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::GooglePay
    }

    async fn submit(&self, order: &OrderData) -> PaymentResult {
        PaymentResult::success(
            PaymentMethod::GooglePay,
            PaymentPayload::GooglePay(self.manifest(order)),
        )
    }
}

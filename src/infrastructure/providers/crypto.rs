use crate::domain::method::PaymentMethod;
use crate::domain::order::OrderData;
use crate::domain::payment::{PaymentPayload, PaymentResult};
use crate::domain::ports::PaymentProcessor;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::collections::HashMap;
use uuid::Uuid;

pub const DEFAULT_CURRENCY: &str = "BTC";
/// How long an issued address stays valid.
pub const INVOICE_TTL_MS: u64 = 15 * 60 * 1000;

/// Issues a receiving address for the customer's preferred coin.
///
/// Unknown or missing coins are invoiced in BTC. No network call is made.
pub struct CryptoProcessor {
    addresses: HashMap<String, String>,
}

impl Default for CryptoProcessor {
    fn default() -> Self {
        let addresses = [
            ("BTC", "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
            ("ETH", "0x742CE0F7Ae4a896E26F4C8c1b0D6F8E6B4Bdb2B4"),
            ("LTC", "LTC1234567890abcdef"),
        ]
        .into_iter()
        .map(|(coin, address)| (coin.to_string(), address.to_string()))
        .collect();
        Self { addresses }
    }
}

impl CryptoProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, coin: &str, address: impl Into<String>) -> Self {
        self.addresses.insert(coin.to_uppercase(), address.into());
        self
    }

    /// Returns the coin actually invoiced together with its receiving address.
    fn receiving_address(&self, requested: Option<&str>) -> (String, String) {
        let requested = requested
            .map(str::to_uppercase)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        match self.addresses.get(&requested) {
            Some(address) => (requested, address.clone()),
            None => (
                DEFAULT_CURRENCY.to_string(),
                self.addresses
                    .get(DEFAULT_CURRENCY)
                    .cloned()
                    .unwrap_or_default(),
            ),
        }
    }
}

fn qr_code(address: &str) -> String {
    let svg = format!("<svg>QR Code for {address}</svg>");
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[async_trait]
impl PaymentProcessor for CryptoProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Crypto
    }

    async fn submit(&self, order: &OrderData) -> PaymentResult {
        let (currency, wallet_address) = self.receiving_address(order.crypto_currency.as_deref());
        let payload = PaymentPayload::CryptoInvoice {
            qr_code: qr_code(&wallet_address),
            wallet_address,
            amount: order.total,
            currency,
            reference: Uuid::new_v4(),
            expires_in_ms: INVOICE_TTL_MS,
        };
        PaymentResult::success(PaymentMethod::Crypto, payload)
    }

    fn timeout_fallback(&self) -> Option<PaymentMethod> {
        Some(PaymentMethod::Shopify)
    }
}

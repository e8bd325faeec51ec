use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a payment integration.
///
/// The declaration order is load-bearing: it is the tie-break order used when two
/// methods score the same, so `Shopify` must stay first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Shopify,
    Bnpl,
    Crypto,
    ApplePay,
    GooglePay,
}

impl PaymentMethod {
    /// Every method, in tie-break order.
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Shopify,
        PaymentMethod::Bnpl,
        PaymentMethod::Crypto,
        PaymentMethod::ApplePay,
        PaymentMethod::GooglePay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Shopify => "shopify",
            PaymentMethod::Bnpl => "bnpl",
            PaymentMethod::Crypto => "crypto",
            PaymentMethod::ApplePay => "apple_pay",
            PaymentMethod::GooglePay => "google_pay",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| PaymentError::ConfigurationError(format!("unknown payment method: {s}")))
    }
}

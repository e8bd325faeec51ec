use crate::domain::method::PaymentMethod;
use crate::domain::order::OrderData;
use crate::domain::profile::{CustomerProfile, DeviceClass};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Business weights of the selection heuristic.
///
/// Every field has a default, so a weights file only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Prior given to `shopify` before any adjustment.
    pub shopify_base: Decimal,
    /// Orders strictly above this total favor financing.
    pub high_value_threshold: Decimal,
    pub high_value_bnpl: Decimal,
    /// Customers strictly younger than this get the young-demographic adjustment.
    pub young_age_limit: u32,
    pub young_bnpl: Decimal,
    pub young_crypto: Decimal,
    pub crypto_regions: Vec<String>,
    pub crypto_region_bonus: Decimal,
    /// Applied to Apple Pay on iOS and to Google Pay on Android.
    pub mobile_wallet_bonus: Decimal,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            shopify_base: dec!(0.7),
            high_value_threshold: dec!(100),
            high_value_bnpl: dec!(0.3),
            young_age_limit: 30,
            young_bnpl: dec!(0.2),
            young_crypto: dec!(0.1),
            crypto_regions: ["US", "EU", "JP", "SG"].map(String::from).to_vec(),
            crypto_region_bonus: dec!(0.15),
            mobile_wallet_bonus: dec!(0.25),
        }
    }
}

impl ScoringWeights {
    /// Rejects negative weights, which would break the non-negative score invariant.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("shopify_base", self.shopify_base),
            ("high_value_bnpl", self.high_value_bnpl),
            ("young_bnpl", self.young_bnpl),
            ("young_crypto", self.young_crypto),
            ("crypto_region_bonus", self.crypto_region_bonus),
            ("mobile_wallet_bonus", self.mobile_wallet_bonus),
        ];
        match weights.iter().find(|(_, value)| *value < Decimal::ZERO) {
            Some((name, value)) => Err(PaymentError::ConfigurationError(format!(
                "scoring weight {name} must not be negative, got {value}"
            ))),
            None => Ok(()),
        }
    }
}

/// Per-call score of every payment method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    scores: BTreeMap<PaymentMethod, Decimal>,
}

impl ScoreTable {
    pub fn get(&self, method: PaymentMethod) -> Decimal {
        self.scores.get(&method).copied().unwrap_or(Decimal::ZERO)
    }

    /// Scores in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (PaymentMethod, Decimal)> + '_ {
        self.scores.iter().map(|(method, score)| (*method, *score))
    }

    /// The method with the strictly greatest score; earlier methods win ties.
    pub fn best(&self) -> PaymentMethod {
        let mut best = (PaymentMethod::ALL[0], self.get(PaymentMethod::ALL[0]));
        for (method, score) in self.iter() {
            if score > best.1 {
                best = (method, score);
            }
        }
        best.0
    }
}

/// Heuristic ranking of payment methods for an order/customer pair.
#[derive(Debug, Clone, Default)]
pub struct SelectionScorer {
    weights: ScoringWeights,
}

impl SelectionScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, order: &OrderData, profile: &CustomerProfile) -> ScoreTable {
        let w = &self.weights;

        let mut bnpl = Decimal::ZERO;
        let mut crypto = Decimal::ZERO;
        if order.total > w.high_value_threshold {
            bnpl += w.high_value_bnpl;
        }
        if profile.age.is_some_and(|age| age < w.young_age_limit) {
            bnpl += w.young_bnpl;
            crypto += w.young_crypto;
        }
        if profile
            .location
            .as_deref()
            .is_some_and(|region| w.crypto_regions.iter().any(|r| r == region))
        {
            crypto += w.crypto_region_bonus;
        }
        let (apple_pay, google_pay) = match profile.device {
            DeviceClass::Ios => (w.mobile_wallet_bonus, Decimal::ZERO),
            DeviceClass::Android => (Decimal::ZERO, w.mobile_wallet_bonus),
            DeviceClass::Other => (Decimal::ZERO, Decimal::ZERO),
        };

        ScoreTable {
            scores: BTreeMap::from([
                (PaymentMethod::Shopify, w.shopify_base),
                (PaymentMethod::Bnpl, bnpl),
                (PaymentMethod::Crypto, crypto),
                (PaymentMethod::ApplePay, apple_pay),
                (PaymentMethod::GooglePay, google_pay),
            ]),
        }
    }

    pub fn select(&self, order: &OrderData, profile: &CustomerProfile) -> PaymentMethod {
        self.score(order, profile).best()
    }
}

use crate::application::registry::ProviderRegistry;
use crate::domain::method::PaymentMethod;
use serde::Serialize;

/// Static feature flags advertised next to the registered methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub ai_selection: bool,
    pub fallback_support: bool,
    pub crypto_support: bool,
    pub bnpl_support: bool,
    pub mobile_wallets: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub available: Vec<PaymentMethod>,
    pub features: FeatureFlags,
}

impl Capabilities {
    pub fn from_registry(registry: &ProviderRegistry) -> Self {
        let available = registry.methods();
        let has = |method| available.contains(&method);
        let features = FeatureFlags {
            ai_selection: true,
            fallback_support: true,
            crypto_support: has(PaymentMethod::Crypto),
            bnpl_support: has(PaymentMethod::Bnpl),
            mobile_wallets: has(PaymentMethod::ApplePay) || has(PaymentMethod::GooglePay),
        };
        Self {
            available,
            features,
        }
    }
}

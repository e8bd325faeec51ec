//! Concrete payment integrations and the registry wiring used by the binary.

pub mod apple_pay;
pub mod bnpl;
pub mod crypto;
pub mod google_pay;
pub mod shopify;

use crate::application::registry::ProviderRegistry;
use crate::config::ProviderSettings;
use crate::error::Result;
use apple_pay::ApplePayProcessor;
use bnpl::BnplProcessor;
use crypto::CryptoProcessor;
use google_pay::GooglePayProcessor;
use shopify::ShopifyProcessor;

/// Registers one processor for every payment method, sharing a single HTTP client.
pub fn default_registry(settings: &ProviderSettings) -> Result<ProviderRegistry> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("payagent/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(ProviderRegistry::new()
        .register(ShopifyProcessor::new(
            client.clone(),
            settings.shopify_store_url.clone(),
            settings.shopify_api_key.clone(),
        ))
        .register(BnplProcessor::new(
            client,
            settings.bnpl_endpoint.clone(),
            settings.bnpl_api_key.clone(),
            settings.frontend_url.clone(),
        ))
        .register(CryptoProcessor::new())
        .register(ApplePayProcessor::new(
            settings.apple_merchant_id.clone(),
            settings.merchant_display_name.clone(),
        ))
        .register(GooglePayProcessor::new(
            settings.google_merchant_id.clone(),
            settings.environment.into(),
        )))
}

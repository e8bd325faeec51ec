//! Runtime configuration: provider credentials, environment and scoring weights.
//!
//! Values come from command-line flags or the matching environment variables (a `.env`
//! file is honored by the binary). Scoring weights are read from an optional JSON file.

use crate::application::scorer::ScoringWeights;
use crate::domain::payment::GooglePayEnvironment;
use crate::error::Result;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_BNPL_ENDPOINT: &str = "https://api.bnpl-provider.com/v1/checkout";
pub const DEFAULT_DISPLAY_NAME: &str = "Clothing Brand";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    #[default]
    Test,
    Production,
}

impl From<Environment> for GooglePayEnvironment {
    fn from(environment: Environment) -> Self {
        match environment {
            Environment::Test => GooglePayEnvironment::Test,
            Environment::Production => GooglePayEnvironment::Production,
        }
    }
}

/// Credentials and endpoints of the payment integrations.
#[derive(Debug, Clone, Args)]
pub struct ProviderSettings {
    /// Base URL of the Shopify store, e.g. https://example.myshopify.com
    #[arg(long, env = "SHOPIFY_STORE_URL")]
    pub shopify_store_url: Option<String>,

    /// Shopify Admin API access token
    #[arg(long, env = "SHOPIFY_API_KEY", hide_env_values = true)]
    pub shopify_api_key: Option<String>,

    /// Bearer token for the BNPL provider
    #[arg(long, env = "BNPL_API_KEY", hide_env_values = true)]
    pub bnpl_api_key: Option<String>,

    /// BNPL checkout-session endpoint
    #[arg(long, env = "BNPL_ENDPOINT", default_value = DEFAULT_BNPL_ENDPOINT)]
    pub bnpl_endpoint: String,

    /// Storefront base URL used for BNPL success/cancel redirects
    #[arg(long, env = "FRONTEND_URL")]
    pub frontend_url: Option<String>,

    #[arg(long, env = "APPLE_MERCHANT_ID")]
    pub apple_merchant_id: Option<String>,

    #[arg(long, env = "GOOGLE_MERCHANT_ID")]
    pub google_merchant_id: Option<String>,

    /// Merchant name shown on wallet payment sheets
    #[arg(long, env = "MERCHANT_DISPLAY_NAME", default_value = DEFAULT_DISPLAY_NAME)]
    pub merchant_display_name: String,

    #[arg(long, value_enum, env = "PAYAGENT_ENVIRONMENT", default_value_t = Environment::Test)]
    pub environment: Environment,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            shopify_store_url: None,
            shopify_api_key: None,
            bnpl_api_key: None,
            bnpl_endpoint: DEFAULT_BNPL_ENDPOINT.to_string(),
            frontend_url: None,
            apple_merchant_id: None,
            google_merchant_id: None,
            merchant_display_name: DEFAULT_DISPLAY_NAME.to_string(),
            environment: Environment::Test,
        }
    }
}

/// Loads scoring weights from `path`, or the built-in defaults when no path is given.
pub fn load_weights(path: Option<&Path>) -> Result<ScoringWeights> {
    let weights = match path {
        Some(path) => {
            let file = File::open(path)?;
            serde_json::from_reader(BufReader::new(file))?
        }
        None => ScoringWeights::default(),
    };
    weights.validate()?;
    Ok(weights)
}

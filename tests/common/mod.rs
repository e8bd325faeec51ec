#![allow(dead_code)]

use assert_cmd::cargo_bin;
use payagent::application::registry::ProviderRegistry;
use payagent::domain::method::PaymentMethod;
use payagent::domain::order::{LineItem, OrderData, VariantId};
use payagent::domain::profile::{CustomerProfile, DeviceClass};
use payagent::infrastructure::scripted::ScriptedProcessor;
use rust_decimal::Decimal;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const PROVIDER_ENV: [&str; 12] = [
    "SHOPIFY_STORE_URL",
    "SHOPIFY_API_KEY",
    "BNPL_API_KEY",
    "BNPL_ENDPOINT",
    "FRONTEND_URL",
    "APPLE_MERCHANT_ID",
    "GOOGLE_MERCHANT_ID",
    "MERCHANT_DISPLAY_NAME",
    "PAYAGENT_ENVIRONMENT",
    "PAYAGENT_WEIGHTS",
    "PAYAGENT_INVOCATION_TIMEOUT_MS",
    "RUST_LOG",
];

pub fn order(total: Decimal) -> OrderData {
    OrderData::new(
        total,
        "jane@example.com",
        vec![LineItem {
            variant_id: VariantId::Numeric(1),
            quantity: 1,
        }],
    )
}

pub fn profile(age: Option<u32>, location: Option<&str>, device: DeviceClass) -> CustomerProfile {
    CustomerProfile {
        age,
        location: location.map(String::from),
        device,
        previous_payments: None,
    }
}

/// A registry where every method succeeds unless overridden later.
pub fn succeeding_registry() -> ProviderRegistry {
    PaymentMethod::ALL
        .into_iter()
        .fold(ProviderRegistry::new(), |registry, method| {
            registry.register(ScriptedProcessor::succeeding(method))
        })
}

pub fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

/// The binary with no provider configuration inherited from the environment.
pub fn payagent() -> Command {
    let mut cmd = Command::new(cargo_bin!("payagent"));
    for var in PROVIDER_ENV {
        cmd.env_remove(var);
    }
    cmd
}

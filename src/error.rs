use crate::domain::method::PaymentMethod;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Provider error: {0}")]
    ProviderError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("{method} timed out after {elapsed_ms}ms")]
    Timeout {
        method: PaymentMethod,
        elapsed_ms: u64,
    },
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;

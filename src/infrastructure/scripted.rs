use crate::domain::method::PaymentMethod;
use crate::domain::order::OrderData;
use crate::domain::payment::{PaymentFailure, PaymentPayload, PaymentResult};
use crate::domain::ports::PaymentProcessor;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A processor that returns a fixed result and records how often it was called.
///
/// Test fixture only: the binary never registers it. It exists so unit and integration
/// tests can drive the orchestrator without network access.
///
/// Clones share the call counter, so a test can keep one clone and register another.
#[derive(Clone)]
pub struct ScriptedProcessor {
    method: PaymentMethod,
    result: PaymentResult,
    delay: Option<Duration>,
    timeout_fallback: Option<PaymentMethod>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProcessor {
    pub fn new(method: PaymentMethod, result: PaymentResult) -> Self {
        Self {
            method,
            result,
            delay: None,
            timeout_fallback: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Always succeeds with a checkout payload pointing at a test URL.
    pub fn succeeding(method: PaymentMethod) -> Self {
        let payload = PaymentPayload::Checkout {
            checkout_url: format!("https://pay.test/{method}"),
            checkout_id: format!("{method}-1"),
            total: "0".to_string(),
            currency: "USD".to_string(),
        };
        Self::new(method, PaymentResult::success(method, payload))
    }

    pub fn failing(method: PaymentMethod, error: &str, fallback: Option<PaymentMethod>) -> Self {
        let failure = PaymentFailure {
            error: error.to_string(),
            fallback,
            details: None,
        };
        Self::new(method, failure.into())
    }

    /// Sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_timeout_fallback(mut self, fallback: PaymentMethod) -> Self {
        self.timeout_fallback = Some(fallback);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentProcessor for ScriptedProcessor {
    fn method(&self) -> PaymentMethod {
        self.method
    }

    async fn submit(&self, _order: &OrderData) -> PaymentResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }

    fn timeout_fallback(&self) -> Option<PaymentMethod> {
        self.timeout_fallback
    }
}

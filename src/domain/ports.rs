use super::method::PaymentMethod;
use super::order::OrderData;
use super::payment::PaymentResult;
use async_trait::async_trait;
use std::sync::Arc;

/// A payment integration as seen by the orchestrator.
///
/// Implementations own their protocol and must fold every outcome, including transport
/// errors, into a [`PaymentResult`]. When an integration knows a sensible alternative it
/// names it in `PaymentFailure::fallback`.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// The identifier this processor is registered under.
    fn method(&self) -> PaymentMethod;

    async fn submit(&self, order: &OrderData) -> PaymentResult;

    /// Fallback to suggest when `submit` does not finish within the invocation timeout.
    fn timeout_fallback(&self) -> Option<PaymentMethod> {
        None
    }
}

pub type PaymentProcessorRef = Arc<dyn PaymentProcessor>;

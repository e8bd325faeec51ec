use super::registry::ProviderRegistry;
use super::scorer::SelectionScorer;
use crate::domain::method::PaymentMethod;
use crate::domain::order::OrderData;
use crate::domain::payment::{OrchestrationOutcome, PaymentFailure, PaymentResult};
use crate::domain::profile::CustomerProfile;
use crate::error::{PaymentError, Result};
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub const DEFAULT_INVOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Which hop of the dispatch sequence an invocation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Primary,
    Fallback,
}

impl Attempt {
    fn as_str(&self) -> &'static str {
        match self {
            Attempt::Primary => "primary",
            Attempt::Fallback => "fallback",
        }
    }
}

/// Selects a payment method, invokes it and falls back at most once.
///
/// The orchestrator holds no per-call state, so one instance can serve concurrent calls
/// from many tasks.
pub struct PaymentOrchestrator {
    registry: ProviderRegistry,
    scorer: SelectionScorer,
    invocation_timeout: Duration,
}

impl PaymentOrchestrator {
    pub fn new(registry: ProviderRegistry, scorer: SelectionScorer) -> Self {
        Self {
            registry,
            scorer,
            invocation_timeout: DEFAULT_INVOCATION_TIMEOUT,
        }
    }

    /// Bounds every single provider invocation, primary and fallback alike.
    pub fn with_invocation_timeout(mut self, timeout: Duration) -> Self {
        self.invocation_timeout = timeout;
        self
    }

    pub fn select_method(&self, order: &OrderData, profile: &CustomerProfile) -> PaymentMethod {
        self.scorer.select(order, profile)
    }

    /// Runs the full selection, invocation and fallback sequence for one order.
    ///
    /// Never fails: internal faults are reported as a failed outcome. When a fallback
    /// runs, `selected_method` still names the first choice. Dropping the returned future
    /// cancels the in-flight provider call.
    pub async fn process_payment(
        &self,
        order: &OrderData,
        profile: &CustomerProfile,
    ) -> OrchestrationOutcome {
        let scores = self.scorer.score(order, profile);
        let selected = scores.best();
        debug!(?scores, "scored payment methods");
        info!(method = %selected, "selected payment method");

        let result = match self.dispatch(selected, order).await {
            Ok(result) => result,
            Err(err) => {
                error!(method = %selected, error = %err, "payment orchestration fault");
                PaymentFailure::internal(&err).into()
            }
        };

        let outcome = OrchestrationOutcome::new(selected, result);
        info!(
            method = %selected,
            transaction_id = %outcome.transaction_id,
            success = outcome.is_success(),
            "payment orchestration complete"
        );
        outcome
    }

    async fn dispatch(&self, selected: PaymentMethod, order: &OrderData) -> Result<PaymentResult> {
        match self.invoke(selected, order, Attempt::Primary).await? {
            PaymentResult::Failure(PaymentFailure {
                error,
                fallback: Some(fallback),
                ..
            }) => {
                warn!(method = %selected, %fallback, %error, "primary payment method failed, falling back");
                // Whatever the fallback returns is final, including a further fallback hint.
                self.invoke(fallback, order, Attempt::Fallback).await
            }
            result => Ok(result),
        }
    }

    async fn invoke(
        &self,
        method: PaymentMethod,
        order: &OrderData,
        attempt: Attempt,
    ) -> Result<PaymentResult> {
        let processor = self.registry.resolve(method)?;
        debug!(%method, attempt = attempt.as_str(), "invoking payment processor");

        match tokio::time::timeout(self.invocation_timeout, processor.submit(order)).await {
            Ok(result) => {
                if let PaymentResult::Failure(failure) = &result {
                    warn!(%method, attempt = attempt.as_str(), error = %failure.error, "payment processor failed");
                }
                Ok(result)
            }
            Err(_) => {
                let err = PaymentError::Timeout {
                    method,
                    elapsed_ms: self.invocation_timeout.as_millis() as u64,
                };
                warn!(%method, attempt = attempt.as_str(), error = %err, "payment processor timed out");
                let failure = PaymentFailure {
                    error: err.to_string(),
                    fallback: processor.timeout_fallback(),
                    details: None,
                };
                Ok(failure.into())
            }
        }
    }
}

use crate::domain::method::PaymentMethod;
use crate::domain::ports::{PaymentProcessor, PaymentProcessorRef};
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Static mapping from payment method to the processor that implements it.
///
/// Built once at startup and only read afterwards. Cloning is cheap; processors are shared.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    processors: HashMap<PaymentMethod, PaymentProcessorRef>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `processor` under its own [`PaymentProcessor::method`], replacing any
    /// earlier registration for that method.
    pub fn register<P>(self, processor: P) -> Self
    where
        P: PaymentProcessor + 'static,
    {
        self.register_shared(Arc::new(processor))
    }

    pub fn register_shared(mut self, processor: PaymentProcessorRef) -> Self {
        self.processors.insert(processor.method(), processor);
        self
    }

    pub fn resolve(&self, method: PaymentMethod) -> Result<&dyn PaymentProcessor> {
        self.processors
            .get(&method)
            .map(|processor| processor.as_ref())
            .ok_or_else(|| {
                PaymentError::ConfigurationError(format!("no processor registered for {method}"))
            })
    }

    /// Registered methods in tie-break order.
    pub fn methods(&self) -> Vec<PaymentMethod> {
        PaymentMethod::ALL
            .into_iter()
            .filter(|method| self.processors.contains_key(method))
            .collect()
    }

    /// Whether every known payment method has a processor.
    pub fn is_complete(&self) -> bool {
        self.processors.len() == PaymentMethod::ALL.len()
    }
}

//! Application layer: method selection and dispatch.
//!
//! `PaymentOrchestrator` is the single entry point. It asks the `SelectionScorer` for the
//! best method, resolves the capability through the `ProviderRegistry` and drives the
//! primary/fallback invocation sequence.

pub mod orchestrator;
pub mod registry;
pub mod scorer;

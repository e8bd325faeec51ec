//! Adapters implementing the `PaymentProcessor` port.

pub mod providers;
/// In-memory test double for the orchestrator; not wired into `default_registry`.
pub mod scripted;

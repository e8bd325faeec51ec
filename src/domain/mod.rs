//! Domain model shared by the scorer, the registry and the provider adapters.
//!
//! Everything in here is plain data or a port definition. No I/O happens in this layer.

pub mod method;
pub mod order;
pub mod payment;
pub mod ports;
pub mod profile;

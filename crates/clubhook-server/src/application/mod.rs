//! Application Layer (Use Cases)
//!
//! Orchestrates translation and delivery of incoming webhooks.

mod relay_service;

pub use relay_service::{RelayError, RelayOutcome, RelayService};

#[cfg(test)]
pub(crate) use relay_service::testing;

//! Message Sink Port
//!
//! Abstract interface for delivering a translated message to its
//! destination chat channel.

use async_trait::async_trait;

use crate::domain::entities::DiscordMessage;
use crate::domain::errors::DomainError;

/// Outbound message delivery interface
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Deliver a message once
    ///
    /// Fails with `DomainError::ExternalService` when the destination
    /// cannot be reached or answers with a non-2xx status.
    async fn send(&self, message: &DiscordMessage) -> Result<(), DomainError>;
}

//! Relay Application Service (Use Case)
//!
//! Validates a decoded webhook event, translates it and forwards the
//! resulting message.

use std::sync::Arc;

use thiserror::Error;

use clubhook::{
    DiscordMessage, DomainError, MemberLookup, MessageSink, WebhookEvent, WebhookTranslator,
};

/// Result of relaying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The message was accepted by the destination
    Delivered(DiscordMessage),
    /// Nothing was sent
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Only single-action events are relayed
    ActionCount(usize),
    /// The action produced no message (unsupported kind, no fields, ...)
    NothingToRender,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Unsupported webhook version: {0:?}")]
    UnsupportedVersion(String),

    #[error("Translation failed: {0}")]
    Translation(#[source] DomainError),

    #[error("Delivery failed: {0}")]
    Delivery(#[source] DomainError),
}

/// Application service relaying Clubhouse events to Discord
pub struct RelayService {
    translator: WebhookTranslator<dyn MemberLookup>,
    sink: Arc<dyn MessageSink>,
}

impl RelayService {
    pub fn new(lookup: Arc<dyn MemberLookup>, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            translator: WebhookTranslator::new(lookup),
            sink,
        }
    }

    /// Translate an event and forward it
    ///
    /// The version is checked before the action count, so an
    /// unsupported multi-action event is still rejected.
    pub async fn relay(&self, event: &WebhookEvent) -> Result<RelayOutcome, RelayError> {
        if !event.is_supported_version() {
            return Err(RelayError::UnsupportedVersion(event.version.clone()));
        }

        if event.actions.len() != 1 {
            tracing::info!(actions = event.actions.len(), "Skipping multi-action event");
            return Ok(RelayOutcome::Skipped(SkipReason::ActionCount(
                event.actions.len(),
            )));
        }

        let Some(message) = self
            .translator
            .translate(event)
            .await
            .map_err(RelayError::Translation)?
        else {
            tracing::info!("Skipping event with nothing to render");
            return Ok(RelayOutcome::Skipped(SkipReason::NothingToRender));
        };

        self.sink.send(&message).await.map_err(RelayError::Delivery)?;

        tracing::info!("Relayed event to Discord");
        Ok(RelayOutcome::Delivered(message))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use clubhook::{DiscordMessage, DomainError, Member, MemberLookup, MessageSink};

    /// Member directory backed by a map
    pub struct StaticMembers(pub HashMap<String, String>);

    impl StaticMembers {
        pub fn new(members: &[(&str, &str)]) -> Self {
            Self(
                members
                    .iter()
                    .map(|(id, name)| (id.to_string(), name.to_string()))
                    .collect(),
            )
        }
    }

    #[async_trait]
    impl MemberLookup for StaticMembers {
        async fn get_member(&self, member_id: &str) -> Result<Member, DomainError> {
            self.0
                .get(member_id)
                .map(|name| Member::new(member_id, name.as_str()))
                .ok_or_else(|| DomainError::not_found("member", member_id))
        }
    }

    /// Sink that records messages, optionally failing every send
    #[derive(Default)]
    pub struct RecordingSink {
        pub sent: Mutex<Vec<DiscordMessage>>,
        pub fail: bool,
    }

    impl RecordingSink {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn sent(&self) -> Vec<DiscordMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageSink for RecordingSink {
        async fn send(&self, message: &DiscordMessage) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::ExternalService("status code: 500".into()));
            }
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }
}

//! Clubhook Domain Library
//!
//! Core types and translation logic for relaying Clubhouse webhook
//! events into Discord webhook messages.
//!
//! # Architecture
//!
//! The crate keeps the same layering as the server that hosts it:
//!
//! - **Domain Layer** (`domain/`): Pure types and logic
//!   - `entities/`: Webhook envelope, actions, changes, references, Discord messages, members
//!   - `value_objects/`: Action kinds and embed colors
//!   - `translation/`: Reference index, field mappers and the webhook translator
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits) for the member
//!   lookup API and the message destination
//!
//! # Usage
//!
//! ```rust,ignore
//! use clubhook::{WebhookEvent, WebhookTranslator};
//!
//! let translator = WebhookTranslator::new(lookup);
//! let message = translator.translate(&event).await?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Action, ActionKind, Changes, DiscordMessage, DomainError, Embed, EmbedField, Member,
    MemberProfile, Reference, ReferenceIndex, SetChange, ValueChange, WebhookEvent,
    WebhookTranslator, SUPPORTED_VERSION,
};
pub use ports::{MemberLookup, MessageSink};

//! Domain Entities
//!
//! - WebhookEvent: Versioned Clubhouse webhook envelope
//! - Action: A single mutation on a tracked work item
//! - Changes: Per-field old/new deltas of an update action
//! - Reference: Denormalized related-entity record
//! - DiscordMessage: Outbound Discord webhook payload
//! - Member: Clubhouse member profile

mod changes;
mod event;
mod member;
mod message;

pub use changes::*;
pub use event::*;
pub use member::*;
pub use message::*;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

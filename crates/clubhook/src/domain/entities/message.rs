//! DiscordMessage - Outbound Discord webhook payload
//!
//! Mirrors the subset of Discord's "Execute Webhook" body this
//! relay produces: empty content and a single rich embed.

use serde::{Deserialize, Serialize};

/// Body posted to a Discord webhook URL
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscordMessage {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

/// Rich embed attached to a message
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// RGB color as a single integer (e.g. 0xF5222D)
    pub color: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

/// Name/value pair rendered inside an embed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

impl DiscordMessage {
    /// Message carrying exactly one embed and no plain content
    pub fn with_embed(embed: Embed) -> Self {
        Self {
            content: String::new(),
            embeds: vec![embed],
        }
    }
}

impl EmbedField {
    /// Field rendered on its own row
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    /// Field rendered side by side with its neighbours
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inline: true,
            ..Self::new(name, value)
        }
    }
}

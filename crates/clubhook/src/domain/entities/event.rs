//! WebhookEvent - Incoming Clubhouse Webhook
//!
//! Expanded from the Clubhouse v1 webhook format. Every field is
//! optional on the wire; absent values and explicit nulls decode to
//! empty defaults so partial events never fail to parse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_to_default, Changes};
use crate::domain::value_objects::ActionKind;

/// The only webhook format version this crate understands
pub const SUPPORTED_VERSION: &str = "v1";

/// Versioned envelope delivered by Clubhouse
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WebhookEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub changed_at: Option<DateTime<Utc>>,
    /// Member who triggered the event
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub primary_id: Option<i64>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub actions: Vec<Action>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub references: Vec<Reference>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub version: String,
}

impl WebhookEvent {
    /// Whether the envelope uses the supported format version
    pub fn is_supported_version(&self) -> bool {
        self.version == SUPPORTED_VERSION
    }

    /// The action of a single-action event, `None` for any other count
    pub fn single_action(&self) -> Option<&Action> {
        match self.actions.as_slice() {
            [action] => Some(action),
            _ => None,
        }
    }

    /// Triggering member id, ignoring empty strings
    pub fn member_id(&self) -> Option<&str> {
        self.member_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A single mutation on a tracked work item
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Action {
    #[serde(default)]
    pub id: Option<i64>,
    /// Raw kind tag ("create", "update", "delete", ...)
    #[serde(default, deserialize_with = "null_to_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub entity_type: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    /// Link to the item in the Clubhouse web app
    #[serde(default, deserialize_with = "null_to_default")]
    pub app_url: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub changes: Changes,

    // Direct attributes, populated on create
    #[serde(default)]
    pub story_type: Option<String>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub milestone_id: Option<i64>,
    #[serde(default)]
    pub epic_id: Option<i64>,
    #[serde(default)]
    pub iteration_id: Option<i64>,
    #[serde(default)]
    pub workflow_state_id: Option<i64>,
    #[serde(default)]
    pub estimate: Option<i64>,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        ActionKind::parse(&self.action)
    }
}

/// Denormalized record for an entity related to the event
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Reference {
    #[serde(default, deserialize_with = "null_to_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub entity_type: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default)]
    pub app_url: Option<String>,
    /// Entity-specific subtype (e.g. "started" for a workflow state)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Reference {
    pub fn new(entity_type: impl Into<String>, id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            entity_type: entity_type.into(),
            name: name.into(),
            app_url: None,
            kind: None,
        }
    }
}

//! Changes - Per-field deltas of an update action
//!
//! Each mutable story property has its own optional sub-record. A
//! sub-record is present only when that property changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_to_default;

/// Old/new pair for a scalar property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValueChange<T> {
    #[serde(default)]
    pub old: Option<T>,
    #[serde(default)]
    pub new: Option<T>,
}

impl<T> ValueChange<T> {
    pub fn new(old: Option<T>, new: Option<T>) -> Self {
        Self { old, new }
    }
}

/// Adds/removes pair for a set-valued property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SetChange<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_to_default")]
    pub adds: Vec<T>,
    #[serde(default = "Vec::new", deserialize_with = "null_to_default")]
    pub removes: Vec<T>,
}

impl<T> SetChange<T> {
    pub fn new(adds: Vec<T>, removes: Vec<T>) -> Self {
        Self { adds, removes }
    }
}

/// All properties Clubhouse reports on an update action
///
/// Flags, timestamps, position, followers and comments are decoded so
/// that richer events parse cleanly, but they are not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Changes {
    pub archived: Option<ValueChange<bool>>,
    pub blocker: Option<ValueChange<bool>>,
    pub blocked: Option<ValueChange<bool>>,
    pub completed: Option<ValueChange<bool>>,
    pub started: Option<ValueChange<bool>>,
    pub completed_at: Option<ValueChange<DateTime<Utc>>>,
    pub started_at: Option<ValueChange<DateTime<Utc>>>,
    pub position: Option<ValueChange<i64>>,
    pub comment_ids: Option<SetChange<i64>>,
    pub follower_ids: Option<SetChange<String>>,

    pub deadline: Option<ValueChange<DateTime<Utc>>>,
    pub epic_id: Option<ValueChange<i64>>,
    pub estimate: Option<ValueChange<i64>>,
    pub iteration_id: Option<ValueChange<i64>>,
    pub label_ids: Option<SetChange<i64>>,
    pub owner_ids: Option<SetChange<String>>,
    pub project_id: Option<ValueChange<i64>>,
    pub story_type: Option<ValueChange<String>>,
    pub text: Option<ValueChange<String>>,
    pub workflow_state_id: Option<ValueChange<i64>>,
}

impl Changes {
    /// Number of owner ids that need a member lookup
    pub fn owner_ids_to_resolve(&self) -> usize {
        self.owner_ids
            .as_ref()
            .map(|owners| owners.adds.len() + owners.removes.len())
            .unwrap_or(0)
    }
}

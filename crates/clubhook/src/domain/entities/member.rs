//! Member - Clubhouse member profile
//!
//! Subset of the `GET /api/v3/members/{id}` response used to render
//! display names.

use serde::{Deserialize, Serialize};

use super::null_to_default;

/// A Clubhouse workspace member
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Member {
    #[serde(default, deserialize_with = "null_to_default")]
    pub id: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, deserialize_with = "null_to_default")]
    pub profile: MemberProfile,
}

/// Public profile of a member
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MemberProfile {
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default)]
    pub mention_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub deactivated: bool,
}

impl Member {
    /// Create a member with just an id and display name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile: MemberProfile {
                name: name.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn display_name(&self) -> &str {
        &self.profile.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_member_response() {
        let member: Member = serde_json::from_value(serde_json::json!({
            "id": "56d8a839-1c52-437f-b981-c3a15a11d6d4",
            "role": "admin",
            "disabled": false,
            "created_at": "2016-12-31T12:30:00Z",
            "profile": {
                "name": "Jane Doe",
                "mention_name": "jane",
                "email_address": "jane@example.com",
                "deactivated": false,
                "display_icon": null
            }
        }))
        .unwrap();

        assert_eq!(member.display_name(), "Jane Doe");
        assert_eq!(member.profile.mention_name.as_deref(), Some("jane"));
    }
}

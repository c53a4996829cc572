//! Translation
//!
//! Turns a single-action Clubhouse webhook into a Discord message:
//! - `reference_index`: (entity type, id) lookup over the event's references
//! - `action_fields`: fields for create actions
//! - `change_fields`: fields for update actions
//! - `translator`: kind dispatch, color, title and message assembly

mod action_fields;
mod change_fields;
mod reference_index;
mod text;
mod translator;

pub use action_fields::action_fields;
pub use change_fields::{change_fields, resolve_owner_names, OwnerNames};
pub use reference_index::{entity_types, ReferenceIndex};
pub use text::title_case;
pub use translator::WebhookTranslator;

/// Placeholder for an id with no matching reference or member
pub const UNKNOWN: &str = "Unknown";

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::entities::Member;
    use crate::domain::errors::DomainError;
    use crate::ports::MemberLookup;

    /// In-memory member directory that records every lookup
    pub struct FakeMemberLookup {
        members: HashMap<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeMemberLookup {
        pub fn new(members: &[(&str, &str)]) -> Self {
            Self {
                members: members
                    .iter()
                    .map(|(id, name)| (id.to_string(), name.to_string()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MemberLookup for FakeMemberLookup {
        async fn get_member(&self, member_id: &str) -> Result<Member, DomainError> {
            self.calls.lock().unwrap().push(member_id.to_string());
            self.members
                .get(member_id)
                .map(|name| Member::new(member_id, name.as_str()))
                .ok_or_else(|| DomainError::not_found("member", member_id))
        }
    }
}

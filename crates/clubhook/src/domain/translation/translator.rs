//! Webhook Translator
//!
//! Dispatches a single-action event on its kind, picks the embed
//! color, builds the fields and composes the title. The result is
//! either one Discord message or nothing to send.

use std::sync::Arc;

use super::action_fields::action_fields;
use super::change_fields::change_fields;
use super::reference_index::ReferenceIndex;
use super::text::title_case;
use crate::domain::entities::{Action, DiscordMessage, Embed, EmbedField, WebhookEvent};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::ActionKind;
use crate::ports::MemberLookup;

/// Translates Clubhouse webhook events into Discord messages
pub struct WebhookTranslator<L: MemberLookup + ?Sized> {
    lookup: Arc<L>,
}

impl<L: MemberLookup + ?Sized> Clone for WebhookTranslator<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
        }
    }
}

impl<L: MemberLookup + ?Sized> WebhookTranslator<L> {
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Translate an event into a message
    ///
    /// Returns `Ok(None)` when the event is not worth a message: it
    /// does not hold exactly one action, the kind is unsupported, no
    /// field could be rendered for a create or update, or the title or
    /// URL would be empty. Member lookup failures are returned as
    /// errors; nothing partial is produced.
    pub async fn translate(
        &self,
        event: &WebhookEvent,
    ) -> Result<Option<DiscordMessage>, DomainError> {
        let Some(action) = event.single_action() else {
            return Ok(None);
        };
        let kind = action.kind();
        let Some(color) = kind.color() else {
            tracing::debug!(action = %action.action, %kind, "Unsupported action kind");
            return Ok(None);
        };

        let references = ReferenceIndex::new(&event.references);
        let fields = match kind {
            ActionKind::Create => action_fields(&references, action),
            ActionKind::Update => {
                change_fields(self.lookup.as_ref(), &references, &action.changes).await?
            }
            ActionKind::Delete | ActionKind::Unsupported => Vec::new(),
        };
        if fields.is_empty() && matches!(kind, ActionKind::Create | ActionKind::Update) {
            tracing::debug!(%kind, "No fields to render");
            return Ok(None);
        }

        let Some(title) = self.title(event, action).await? else {
            return Ok(None);
        };
        if action.app_url.is_empty() {
            return Ok(None);
        }

        tracing::debug!(
            %kind,
            entity_type = %action.entity_type,
            field_count = fields.len(),
            references = references.len(),
            "Translated webhook event"
        );

        Ok(Some(build_message(title, action.app_url.clone(), color, fields)))
    }

    /// "<Member> <kind>d <entity>: <name>", or "<Kind>d <entity>: <name>"
    /// when the event has no triggering member
    async fn title(
        &self,
        event: &WebhookEvent,
        action: &Action,
    ) -> Result<Option<String>, DomainError> {
        if action.action.is_empty() || action.entity_type.is_empty() || action.name.is_empty() {
            return Ok(None);
        }

        let title = match event.member_id() {
            Some(member_id) => {
                let member = self.lookup.get_member(member_id).await?;
                format!(
                    "{} {}d {}: {}",
                    title_case(member.display_name()),
                    action.action,
                    action.entity_type,
                    action.name
                )
            }
            None => format!(
                "{}d {}: {}",
                title_case(&action.action),
                action.entity_type,
                action.name
            ),
        };

        Ok(Some(title))
    }
}

fn build_message(
    title: String,
    url: String,
    color: u32,
    fields: Vec<EmbedField>,
) -> DiscordMessage {
    DiscordMessage::with_embed(Embed {
        title,
        url,
        description: String::new(),
        color,
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Changes, Reference, SetChange, ValueChange};
    use crate::domain::translation::testing::FakeMemberLookup;
    use crate::domain::value_objects::{CREATE_COLOR, DELETE_COLOR, UPDATE_COLOR};

    fn story_event(kind: &str, member_id: Option<&str>) -> WebhookEvent {
        WebhookEvent {
            version: "v1".to_string(),
            member_id: member_id.map(str::to_string),
            actions: vec![Action {
                action: kind.to_string(),
                entity_type: "story".to_string(),
                name: "Fix login bug".to_string(),
                app_url: "https://app.clubhouse.io/acme/story/13".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn translator(
        members: &[(&str, &str)],
    ) -> (WebhookTranslator<FakeMemberLookup>, Arc<FakeMemberLookup>) {
        let lookup = Arc::new(FakeMemberLookup::new(members));
        (WebhookTranslator::new(Arc::clone(&lookup)), lookup)
    }

    #[tokio::test]
    async fn test_update_title_with_member() {
        let (translator, _) = translator(&[("m1", "jane doe")]);
        let mut event = story_event("update", Some("m1"));
        event.actions[0].changes.estimate = Some(ValueChange::new(Some(5), None));

        let message = translator.translate(&event).await.unwrap().unwrap();
        let embed = &message.embeds[0];

        assert_eq!(embed.title, "Jane Doe updated story: Fix login bug");
        assert_eq!(embed.url, "https://app.clubhouse.io/acme/story/13");
        assert_eq!(embed.color, UPDATE_COLOR);
        assert_eq!(embed.fields, vec![EmbedField::new("Estimate", "5 -> Unestimated")]);
        assert_eq!(message.content, "");
    }

    #[tokio::test]
    async fn test_update_title_without_member() {
        let (translator, lookup) = translator(&[]);
        let mut event = story_event("update", None);
        event.actions[0].changes.estimate = Some(ValueChange::new(Some(5), None));

        let message = translator.translate(&event).await.unwrap().unwrap();

        assert_eq!(message.embeds[0].title, "Updated story: Fix login bug");
        assert!(lookup.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_uses_action_attributes() {
        let (translator, _) = translator(&[]);
        let mut event = story_event("create", None);
        event.actions[0].story_type = Some("bug".to_string());
        event.actions[0].project_id = Some(1);
        event.references = vec![Reference::new("project", 1, "Backend")];

        let message = translator.translate(&event).await.unwrap().unwrap();
        let embed = &message.embeds[0];

        assert_eq!(embed.title, "Created story: Fix login bug");
        assert_eq!(embed.color, CREATE_COLOR);
        assert_eq!(
            embed.fields,
            vec![
                EmbedField::inline("Type", "bug"),
                EmbedField::inline("Project", "Backend"),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_without_attributes_is_skipped() {
        let (translator, lookup) = translator(&[("m1", "Jane Doe")]);
        let event = story_event("create", Some("m1"));

        assert!(translator.translate(&event).await.unwrap().is_none());
        assert!(lookup.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_without_fields_is_skipped() {
        let (translator, _) = translator(&[]);
        let mut event = story_event("update", None);
        event.actions[0].changes = Changes {
            archived: Some(ValueChange::new(Some(false), Some(true))),
            ..Default::default()
        };

        assert!(translator.translate(&event).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_has_no_fields() {
        let (translator, _) = translator(&[]);
        let event = story_event("delete", None);

        let message = translator.translate(&event).await.unwrap().unwrap();

        assert_eq!(message.embeds[0].title, "Deleted story: Fix login bug");
        assert_eq!(message.embeds[0].color, DELETE_COLOR);
        assert!(message.embeds[0].fields.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_kind_skips_member_lookup() {
        let (translator, lookup) = translator(&[("m1", "Jane Doe")]);
        let event = story_event("archive", Some("m1"));

        assert!(translator.translate(&event).await.unwrap().is_none());
        assert!(lookup.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_name_or_url_is_skipped() {
        let (translator, _) = translator(&[]);

        let mut nameless = story_event("delete", None);
        nameless.actions[0].name.clear();
        assert!(translator.translate(&nameless).await.unwrap().is_none());

        let mut unlinked = story_event("delete", None);
        unlinked.actions[0].app_url.clear();
        assert!(translator.translate(&unlinked).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_title_lookup_is_an_error() {
        let (translator, _) = translator(&[]);
        let event = story_event("delete", Some("ghost"));

        assert!(translator.translate(&event).await.is_err());
    }

    #[tokio::test]
    async fn test_failed_owner_lookup_is_an_error() {
        let (translator, lookup) = translator(&[("u1", "Jane Doe"), ("m1", "Max Poe")]);
        let mut event = story_event("update", Some("m1"));
        event.actions[0].changes.owner_ids = Some(SetChange::new(
            vec!["u1".to_string(), "u2".to_string()],
            vec![],
        ));

        assert!(translator.translate(&event).await.is_err());
        // The title lookup never runs once field mapping failed.
        assert_eq!(lookup.calls(), vec!["u1", "u2"]);
    }

    #[tokio::test]
    async fn test_multiple_actions_are_skipped() {
        let (translator, _) = translator(&[]);
        let mut event = story_event("delete", None);
        event.actions.push(event.actions[0].clone());

        assert!(translator.translate(&event).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_translation_is_deterministic() {
        let (translator, _) = translator(&[("m1", "Jane Doe"), ("u1", "John Roe")]);
        let mut event = story_event("update", Some("m1"));
        event.references = vec![
            Reference::new("label", 1, "bug"),
            Reference::new("workflow-state", 20, "Done"),
        ];
        event.actions[0].changes = Changes {
            label_ids: Some(SetChange::new(vec![1], vec![])),
            owner_ids: Some(SetChange::new(vec!["u1".to_string()], vec![])),
            workflow_state_id: Some(ValueChange::new(Some(10), Some(20))),
            ..Default::default()
        };

        let first = translator.translate(&event).await.unwrap().unwrap();
        let second = translator.translate(&event).await.unwrap().unwrap();

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}

//! Fields for create actions

use super::reference_index::{entity_types, ReferenceIndex};
use super::UNKNOWN;
use crate::domain::entities::{Action, EmbedField};

/// Inline fields describing a newly created item
///
/// Order is fixed: type, project, milestone, state, epic, iteration,
/// estimate. Attributes that are absent, empty or zero are skipped.
/// Ids without a bundled reference render as "Unknown".
pub fn action_fields(references: &ReferenceIndex<'_>, action: &Action) -> Vec<EmbedField> {
    let mut fields = Vec::new();

    if let Some(story_type) = action.story_type.as_deref().filter(|t| !t.is_empty()) {
        fields.push(EmbedField::inline("Type", story_type));
    }

    let referenced = [
        ("Project", entity_types::PROJECT, action.project_id),
        ("Milestone", entity_types::MILESTONE, action.milestone_id),
        ("State", entity_types::WORKFLOW_STATE, action.workflow_state_id),
        ("Epic", entity_types::EPIC, action.epic_id),
        ("Iteration", entity_types::ITERATION, action.iteration_id),
    ];
    for (name, entity_type, id) in referenced {
        if let Some(id) = id.filter(|id| *id > 0) {
            let value = references.name(entity_type, id).unwrap_or(UNKNOWN);
            fields.push(EmbedField::inline(name, value));
        }
    }

    if let Some(estimate) = action.estimate.filter(|e| *e > 0) {
        fields.push(EmbedField::inline("Estimate", estimate.to_string()));
    }

    fields
}

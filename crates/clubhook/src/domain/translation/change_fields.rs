//! Fields for update actions
//!
//! Each changed property is rendered by an independent rule. Rules
//! run in the order of `CHANGE_RULES` and only read their own
//! sub-record, so each one can be checked in isolation.

use chrono::SecondsFormat;

use super::reference_index::{entity_types, ReferenceIndex};
use super::text::title_case;
use super::UNKNOWN;
use crate::domain::entities::{Changes, EmbedField, ValueChange};
use crate::domain::errors::DomainError;
use crate::ports::MemberLookup;

const NO_DATE: &str = "No Date";
const NONE: &str = "None";
const UNESTIMATED: &str = "Unestimated";
const EDITED: &str = "(Edited)";

/// Display names of added and removed owners, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerNames {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

/// Look up every owner id in the changes, one call at a time
///
/// Adds are resolved before removes. The first failed lookup aborts
/// the whole resolution.
pub async fn resolve_owner_names<L>(
    lookup: &L,
    changes: &Changes,
) -> Result<OwnerNames, DomainError>
where
    L: MemberLookup + ?Sized,
{
    let Some(owners) = &changes.owner_ids else {
        return Ok(OwnerNames::default());
    };
    tracing::debug!(
        lookups = changes.owner_ids_to_resolve(),
        "Resolving owner names"
    );

    let mut names = OwnerNames::default();
    for id in &owners.adds {
        names.added.push(lookup.get_member(id).await?.display_name().to_string());
    }
    for id in &owners.removes {
        names.removed.push(lookup.get_member(id).await?.display_name().to_string());
    }

    Ok(names)
}

/// Fields describing what an update action changed
///
/// Owner ids are resolved through `lookup` first; any lookup failure
/// is returned and no fields are produced.
pub async fn change_fields<L>(
    lookup: &L,
    references: &ReferenceIndex<'_>,
    changes: &Changes,
) -> Result<Vec<EmbedField>, DomainError>
where
    L: MemberLookup + ?Sized,
{
    let owners = resolve_owner_names(lookup, changes).await?;
    let ctx = ChangeContext {
        changes,
        references,
        owners: &owners,
    };
    Ok(render_changes(&ctx))
}

/// Inputs shared by every change rule
struct ChangeContext<'a> {
    changes: &'a Changes,
    references: &'a ReferenceIndex<'a>,
    owners: &'a OwnerNames,
}

type ChangeRule = fn(&ChangeContext<'_>, &mut Vec<EmbedField>);

const CHANGE_RULES: &[ChangeRule] = &[
    deadline_field,
    epic_field,
    estimate_field,
    iteration_field,
    label_fields,
    owner_fields,
    project_field,
    story_type_field,
    text_field,
    workflow_state_field,
];

fn render_changes(ctx: &ChangeContext<'_>) -> Vec<EmbedField> {
    let mut fields = Vec::new();
    for rule in CHANGE_RULES {
        rule(ctx, &mut fields);
    }
    fields
}

fn arrow(old: &str, new: &str) -> String {
    format!("{old} -> {new}")
}

/// Name of an optional id: "None" when absent, "Unknown" when unresolved
fn reference_name<'a>(
    references: &ReferenceIndex<'a>,
    entity_type: &str,
    id: Option<i64>,
) -> &'a str {
    match id {
        None => NONE,
        Some(id) => references.name(entity_type, id).unwrap_or(UNKNOWN),
    }
}

fn reference_change(
    references: &ReferenceIndex<'_>,
    entity_type: &str,
    change: &ValueChange<i64>,
) -> String {
    arrow(
        reference_name(references, entity_type, change.old),
        reference_name(references, entity_type, change.new),
    )
}

fn deadline_field(ctx: &ChangeContext<'_>, fields: &mut Vec<EmbedField>) {
    let Some(change) = &ctx.changes.deadline else {
        return;
    };
    let render = |value: &Option<chrono::DateTime<chrono::Utc>>| match value {
        Some(at) => at.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => NO_DATE.to_string(),
    };
    fields.push(EmbedField::new(
        "Deadline",
        arrow(&render(&change.old), &render(&change.new)),
    ));
}

fn epic_field(ctx: &ChangeContext<'_>, fields: &mut Vec<EmbedField>) {
    if let Some(change) = &ctx.changes.epic_id {
        let value = reference_change(ctx.references, entity_types::EPIC, change);
        fields.push(EmbedField::new("Epic", value));
    }
}

fn estimate_field(ctx: &ChangeContext<'_>, fields: &mut Vec<EmbedField>) {
    let Some(change) = &ctx.changes.estimate else {
        return;
    };
    let render = |value: Option<i64>| match value {
        Some(estimate) => estimate.to_string(),
        None => UNESTIMATED.to_string(),
    };
    fields.push(EmbedField::new(
        "Estimate",
        arrow(&render(change.old), &render(change.new)),
    ));
}

fn iteration_field(ctx: &ChangeContext<'_>, fields: &mut Vec<EmbedField>) {
    if let Some(change) = &ctx.changes.iteration_id {
        let value = reference_change(ctx.references, entity_types::ITERATION, change);
        fields.push(EmbedField::new("Iteration", value));
    }
}

fn label_names<'a>(references: &ReferenceIndex<'a>, ids: &[i64]) -> Vec<&'a str> {
    // Unbundled labels are dropped rather than listed as "Unknown".
    ids.iter()
        .filter_map(|id| references.name(entity_types::LABEL, *id))
        .collect()
}

fn label_fields(ctx: &ChangeContext<'_>, fields: &mut Vec<EmbedField>) {
    let Some(labels) = &ctx.changes.label_ids else {
        return;
    };
    for (name, ids) in [
        ("Label(s) Added", labels.adds.as_slice()),
        ("Label(s) Removed", labels.removes.as_slice()),
    ] {
        let resolved = label_names(ctx.references, ids);
        if !resolved.is_empty() {
            fields.push(EmbedField::new(name, resolved.join(", ")));
        }
    }
}

fn owner_fields(ctx: &ChangeContext<'_>, fields: &mut Vec<EmbedField>) {
    for (name, owners) in [
        ("Owner(s) Added", &ctx.owners.added),
        ("Owner(s) Removed", &ctx.owners.removed),
    ] {
        if !owners.is_empty() {
            fields.push(EmbedField::new(name, owners.join(", ")));
        }
    }
}

fn project_field(ctx: &ChangeContext<'_>, fields: &mut Vec<EmbedField>) {
    if let Some(change) = &ctx.changes.project_id {
        let value = reference_change(ctx.references, entity_types::PROJECT, change);
        fields.push(EmbedField::new("Project", value));
    }
}

fn story_type_field(ctx: &ChangeContext<'_>, fields: &mut Vec<EmbedField>) {
    if let Some(change) = &ctx.changes.story_type {
        let value = arrow(
            change.old.as_deref().unwrap_or(NONE),
            change.new.as_deref().unwrap_or(NONE),
        );
        fields.push(EmbedField::new("Type", title_case(&value)));
    }
}

fn text_field(ctx: &ChangeContext<'_>, fields: &mut Vec<EmbedField>) {
    // The full text is unbounded, so only the fact of an edit is shown.
    if let Some(change) = &ctx.changes.text {
        if change.old != change.new {
            fields.push(EmbedField::new("Description", EDITED));
        }
    }
}

fn workflow_state_field(ctx: &ChangeContext<'_>, fields: &mut Vec<EmbedField>) {
    if let Some(change) = &ctx.changes.workflow_state_id {
        let value = reference_change(ctx.references, entity_types::WORKFLOW_STATE, change);
        fields.push(EmbedField::new("State", title_case(&value)));
    }
}

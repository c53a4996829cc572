//! Reference index over an event's bundled references

use std::collections::HashMap;

use crate::domain::entities::Reference;

/// Entity type labels used by Clubhouse references
pub mod entity_types {
    pub const EPIC: &str = "epic";
    pub const ITERATION: &str = "iteration";
    pub const LABEL: &str = "label";
    pub const MILESTONE: &str = "milestone";
    pub const PROJECT: &str = "project";
    pub const WORKFLOW_STATE: &str = "workflow-state";
}

/// Lookup table keyed by (entity type, id), scoped to one event
///
/// Ids are only unique within an entity type, so a project and an
/// epic may share the same id. Duplicate keys keep the last reference.
#[derive(Debug, Default)]
pub struct ReferenceIndex<'a> {
    by_type: HashMap<&'a str, HashMap<i64, &'a Reference>>,
}

impl<'a> ReferenceIndex<'a> {
    pub fn new(references: &'a [Reference]) -> Self {
        let mut by_type: HashMap<&'a str, HashMap<i64, &'a Reference>> = HashMap::new();
        for reference in references {
            by_type
                .entry(reference.entity_type.as_str())
                .or_default()
                .insert(reference.id, reference);
        }
        Self { by_type }
    }

    pub fn get(&self, entity_type: &str, id: i64) -> Option<&'a Reference> {
        self.by_type
            .get(entity_type)
            .and_then(|refs| refs.get(&id))
            .copied()
    }

    /// Display name of a reference, `None` when it was not bundled
    pub fn name(&self, entity_type: &str, id: i64) -> Option<&'a str> {
        self.get(entity_type, id).map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_type.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_scoped_by_entity_type() {
        let references = vec![
            Reference::new("project", 7, "Backend"),
            Reference::new("epic", 7, "Auth Revamp"),
        ];
        let index = ReferenceIndex::new(&references);

        assert_eq!(index.name(entity_types::PROJECT, 7), Some("Backend"));
        assert_eq!(index.name(entity_types::EPIC, 7), Some("Auth Revamp"));
        assert_eq!(index.name(entity_types::ITERATION, 7), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_missing_is_distinct_from_empty_name() {
        let references = vec![Reference::new("label", 1, "")];
        let index = ReferenceIndex::new(&references);

        assert_eq!(index.name(entity_types::LABEL, 1), Some(""));
        assert_eq!(index.name(entity_types::LABEL, 2), None);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let references = vec![
            Reference::new("workflow-state", 20, "Doing"),
            Reference::new("workflow-state", 20, "Done"),
        ];
        let index = ReferenceIndex::new(&references);

        assert_eq!(index.name(entity_types::WORKFLOW_STATE, 20), Some("Done"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_empty_index() {
        let index = ReferenceIndex::new(&[]);
        assert!(index.is_empty());
        assert!(index.get(entity_types::PROJECT, 1).is_none());
    }
}

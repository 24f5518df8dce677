//! Selection and detail-view context.
//!
//! Each list view tracks at most one expanded entity at a time, and the
//! trends/interventions views accept a resident id carried in from another
//! view. That id is a foreign key with no guaranteed referential
//! integrity: when it matches nothing, the documented fallback data set is
//! substituted instead of rendering an empty or crashing view.

use crate::fixtures;
use crate::model::{Resident, ResidentId};

/// Tracks the single expanded/selected entity of one list instance.
///
/// Selection state is ephemeral and scoped to the view instance that owns
/// it; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<Id: PartialEq> {
    current: Option<Id>,
}

impl<Id: PartialEq> Selection<Id> {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Select an entity, replacing any previous selection.
    pub fn select(&mut self, id: Id) {
        self.current = Some(id);
    }

    /// Toggle an entity: selecting the current id collapses it, anything
    /// else becomes the sole selection.
    pub fn toggle(&mut self, id: Id) {
        if self.current.as_ref() == Some(&id) {
            self.current = None;
        } else {
            self.current = Some(id);
        }
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The currently selected id, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Id> {
        self.current.as_ref()
    }

    /// Whether the given id is the current selection.
    #[must_use]
    pub fn is_selected(&self, id: &Id) -> bool {
        self.current.as_ref() == Some(id)
    }
}

/// The resident context a detail view renders under.
///
/// Built from an optional resident id (query parameter, `--resident`
/// flag). Resolution never fails: a missing or unknown id yields the
/// fallback resident with `fallback` set, so callers can label the view
/// honestly while still rendering data.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentContext {
    /// The resident the view is scoped to.
    pub resident: Resident,
    /// True when the requested id had no fixture match and the default
    /// data set was substituted.
    pub fallback: bool,
}

impl ResidentContext {
    /// Resolve a context from an optional resident id.
    ///
    /// `None` (no id carried in) resolves to the default resident without
    /// the fallback marker: the view was simply opened unscoped.
    #[must_use]
    pub fn resolve(id: Option<&ResidentId>) -> Self {
        match id {
            None => Self {
                resident: fixtures::default_resident(),
                fallback: false,
            },
            Some(id) => match fixtures::resident_by_id(id) {
                Some(resident) => Self {
                    resident,
                    fallback: false,
                },
                None => {
                    tracing::debug!(resident = %id, "unknown resident id, using fallback data");
                    Self {
                        resident: fixtures::default_resident(),
                        fallback: true,
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_starts_empty() {
        let selection: Selection<ResidentId> = Selection::new();
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_select_b_after_a_leaves_exactly_b() {
        let mut selection = Selection::new();
        selection.select(ResidentId::new("1"));
        selection.select(ResidentId::new("2"));

        assert!(selection.is_selected(&ResidentId::new("2")));
        assert!(!selection.is_selected(&ResidentId::new("1")));
    }

    #[test]
    fn test_toggle_collapses_current_selection() {
        let mut selection = Selection::new();
        selection.toggle(ResidentId::new("3"));
        assert!(selection.is_selected(&ResidentId::new("3")));

        selection.toggle(ResidentId::new("3"));
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_toggle_switches_between_entities() {
        let mut selection = Selection::new();
        selection.toggle(ResidentId::new("3"));
        selection.toggle(ResidentId::new("5"));
        assert!(selection.is_selected(&ResidentId::new("5")));
        assert!(!selection.is_selected(&ResidentId::new("3")));
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.select(ResidentId::new("7"));
        selection.clear();
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_selection_works_for_numeric_ids_too() {
        let mut selection: Selection<u32> = Selection::new();
        selection.select(4);
        selection.toggle(4);
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_context_with_known_id() {
        let id = ResidentId::new("4");
        let ctx = ResidentContext::resolve(Some(&id));
        assert_eq!(ctx.resident.name, "Klaus Bauer");
        assert!(!ctx.fallback);
    }

    #[test]
    fn test_context_with_unknown_id_falls_back() {
        let id = ResidentId::new("999");
        let ctx = ResidentContext::resolve(Some(&id));
        assert_eq!(ctx.resident, fixtures::default_resident());
        assert!(ctx.fallback);
    }

    #[test]
    fn test_context_without_id_is_unscoped_default() {
        let ctx = ResidentContext::resolve(None);
        assert_eq!(ctx.resident, fixtures::default_resident());
        assert!(!ctx.fallback);
    }
}

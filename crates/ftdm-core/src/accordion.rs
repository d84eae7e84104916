//! Single-expand accordion state
//!
//! One nullable id rather than a set of flags, so at most one record of an
//! accordion can ever be expanded.

use serde::Serialize;

use crate::content::RecordId;

/// Expansion state of one accordion instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Accordion {
    expanded: Option<RecordId>,
}

impl Accordion {
    /// All records collapsed
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `id` expanded
    pub fn with_expanded(id: RecordId) -> Self {
        Self { expanded: Some(id) }
    }

    /// Collapse `id` if it is the expanded record, otherwise expand it
    /// (collapsing whichever record was open before)
    pub fn toggle(&mut self, id: RecordId) {
        self.expanded = match self.expanded {
            Some(current) if current == id => None,
            _ => Some(id),
        };
    }

    pub fn expand(&mut self, id: RecordId) {
        self.expanded = Some(id);
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn is_expanded(&self, id: RecordId) -> bool {
        self.expanded == Some(id)
    }

    pub fn expanded(&self) -> Option<RecordId> {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: RecordId = RecordId("1");
    const B: RecordId = RecordId("2");
    const C: RecordId = RecordId("3");

    fn expanded_count(acc: &Accordion, ids: &[RecordId]) -> usize {
        ids.iter().filter(|id| acc.is_expanded(**id)).count()
    }

    #[test]
    fn test_starts_collapsed() {
        let acc = Accordion::new();
        assert_eq!(acc.expanded(), None);
        assert!(!acc.is_expanded(A));
    }

    #[test]
    fn test_double_toggle_returns_to_none() {
        let mut acc = Accordion::new();
        acc.toggle(A);
        assert_eq!(acc.expanded(), Some(A));
        acc.toggle(A);
        assert_eq!(acc.expanded(), None);
    }

    #[test]
    fn test_toggle_other_moves_expansion() {
        let mut acc = Accordion::new();
        acc.toggle(A);
        acc.toggle(B);
        assert!(acc.is_expanded(B));
        assert!(!acc.is_expanded(A));
    }

    #[test]
    fn test_at_most_one_expanded_for_any_sequence() {
        let ids = [A, B, C];
        let sequence = [A, B, B, C, A, A, A, C, B, C, C, A];
        let mut acc = Accordion::new();
        for id in sequence {
            acc.toggle(id);
            assert!(expanded_count(&acc, &ids) <= 1);
        }
    }

    #[test]
    fn test_two_stage_click_scenario() {
        let mut acc = Accordion::new();

        acc.toggle(A);
        assert!(acc.is_expanded(A));
        assert!(!acc.is_expanded(B));

        acc.toggle(A);
        assert!(!acc.is_expanded(A));
        assert!(!acc.is_expanded(B));

        acc.toggle(A);
        acc.toggle(B);
        assert_eq!(acc.expanded(), Some(B));
        assert!(!acc.is_expanded(A));
        assert!(acc.is_expanded(B));
    }

    #[test]
    fn test_expand_and_collapse() {
        let mut acc = Accordion::with_expanded(C);
        assert!(acc.is_expanded(C));
        acc.expand(A);
        assert_eq!(acc.expanded(), Some(A));
        acc.collapse();
        assert_eq!(acc.expanded(), None);
    }
}

//! Selection set for bulk actions.
//!
//! Tracks which record ids are marked, independent of the current
//! filter/sort state. Membership tests are O(1).

use std::collections::HashSet;

/// Record ids marked for bulk action.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(|s| s.as_str())
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Select-all over the currently visible rows.
    ///
    /// If every visible id is already selected, the selection is
    /// cleared entirely. Otherwise the selection becomes exactly the
    /// visible ids - ids selected earlier but filtered out of view are
    /// discarded, not kept.
    pub fn select_all_visible<I, S>(&mut self, visible: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let visible: Vec<String> = visible
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        if visible.iter().all(|id| self.ids.contains(id)) {
            self.ids.clear();
        } else {
            self.ids = visible.into_iter().collect();
        }
    }
}

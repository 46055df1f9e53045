//! Selected-file tracking.
//!
//! The selection is a set of file identifiers scoped to the current view.
//! It is cleared on every navigation transition so bulk actions never
//! touch files that are no longer in sight, and it is never persisted.
//! Category and search changes keep the selection; the count shown to the
//! user is the intersection with the currently visible files.

use std::collections::HashSet;

use planroom_core::types::FileId;
use planroom_entity::FileRecord;

/// The set of currently selected file identifiers.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<FileId>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a file is selected.
    pub fn has(&self, id: FileId) -> bool {
        self.ids.contains(&id)
    }

    /// Flip one file in or out of the selection.
    pub fn toggle(&mut self, id: FileId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Bulk add or remove. Used by "select all visible": callers pass only
    /// identifiers present in the current visible list, so selecting "all"
    /// never reaches out-of-scope files.
    pub fn set_many(&mut self, ids: &[FileId], selected: bool) {
        for id in ids {
            if selected {
                self.ids.insert(*id);
            } else {
                self.ids.remove(id);
            }
        }
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected files.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The selected identifiers, unordered.
    pub fn ids(&self) -> Vec<FileId> {
        self.ids.iter().copied().collect()
    }

    /// How many of the given visible files are selected.
    pub fn visible_count(&self, visible: &[FileRecord]) -> usize {
        visible.iter().filter(|f| self.ids.contains(&f.id)).count()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use planroom_core::types::ProjectId;

    use super::*;

    fn record(id: FileId) -> FileRecord {
        FileRecord {
            id,
            project_id: ProjectId::new(),
            name: "f.pdf".to_string(),
            description: None,
            tags: Vec::new(),
            folder_path: None,
            category: None,
            mime_type: None,
            size_bytes: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut sel = SelectionSet::new();
        let id = FileId::new();
        sel.toggle(id);
        assert!(sel.has(id));
        sel.toggle(id);
        assert!(!sel.has(id));
    }

    #[test]
    fn test_set_many_and_clear() {
        let mut sel = SelectionSet::new();
        let ids: Vec<FileId> = (0..3).map(|_| FileId::new()).collect();
        sel.set_many(&ids, true);
        assert_eq!(sel.len(), 3);
        sel.set_many(&ids[..2], false);
        assert_eq!(sel.len(), 1);
        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn test_visible_count_is_an_intersection() {
        let mut sel = SelectionSet::new();
        let visible_id = FileId::new();
        let hidden_id = FileId::new();
        sel.set_many(&[visible_id, hidden_id], true);

        let visible = vec![record(visible_id)];
        assert_eq!(sel.visible_count(&visible), 1);
        assert_eq!(sel.len(), 2);
    }
}

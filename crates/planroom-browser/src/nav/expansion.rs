//! Expanded-folder side state, persisted per project.
//!
//! Independent of navigation: entering a folder auto-expands the folder
//! and every ancestor prefix so the explorer tree reveals the active
//! path, but nothing is ever auto-collapsed.

use std::collections::HashSet;

use tracing::debug;

use planroom_core::keys;
use planroom_core::path;
use planroom_core::result::AppResult;
use planroom_core::traits::UiStateStore;
use planroom_core::types::ProjectId;

/// The set of expanded folder paths for one project.
#[derive(Debug, Clone, Default)]
pub struct ExpandedFolders {
    paths: HashSet<String>,
}

impl ExpandedFolders {
    /// An empty expansion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted set for a project. A missing or unreadable
    /// entry yields an empty set; stored paths are re-normalized.
    pub async fn load(store: &dyn UiStateStore, project_id: ProjectId) -> AppResult<Self> {
        let key = keys::expanded_folders(project_id);
        let paths = match store.get(&key).await? {
            Some(raw) => {
                let stored: Vec<String> = serde_json::from_str(&raw).unwrap_or_default();
                stored
                    .iter()
                    .map(|p| path::normalize(Some(p)))
                    .filter(|p| !p.is_empty())
                    .collect()
            }
            None => HashSet::new(),
        };
        debug!(project_id = %project_id, count = paths.len(), "Loaded expanded folders");
        Ok(Self { paths })
    }

    /// Persist the set for a project as a JSON string array. Sorted for
    /// deterministic storage.
    pub async fn save(&self, store: &dyn UiStateStore, project_id: ProjectId) -> AppResult<()> {
        let key = keys::expanded_folders(project_id);
        let mut sorted: Vec<&str> = self.paths.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        let json = serde_json::to_string(&sorted)?;
        store.set(&key, &json).await
    }

    /// Whether a folder is expanded.
    pub fn is_expanded(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Expand one folder.
    pub fn expand(&mut self, raw: &str) {
        let canonical = path::normalize(Some(raw));
        if !canonical.is_empty() {
            self.paths.insert(canonical);
        }
    }

    /// Collapse one folder. Explicit user action only.
    pub fn collapse(&mut self, path: &str) {
        self.paths.remove(path);
    }

    /// Toggle one folder; returns the new expanded state.
    pub fn toggle(&mut self, raw: &str) -> bool {
        let canonical = path::normalize(Some(raw));
        if canonical.is_empty() {
            return false;
        }
        if self.paths.remove(&canonical) {
            false
        } else {
            self.paths.insert(canonical);
            true
        }
    }

    /// Expand a folder and every ancestor prefix. Siblings keep their
    /// state.
    pub fn reveal(&mut self, raw: &str) {
        let canonical = path::normalize(Some(raw));
        if canonical.is_empty() {
            return;
        }
        for ancestor in path::ancestors(&canonical) {
            self.paths.insert(ancestor);
        }
        self.paths.insert(canonical);
    }

    /// The expanded paths, unordered.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_expands_ancestors() {
        let mut expanded = ExpandedFolders::new();
        expanded.reveal("/a/b/c");
        assert!(expanded.is_expanded("/a"));
        assert!(expanded.is_expanded("/a/b"));
        assert!(expanded.is_expanded("/a/b/c"));
    }

    #[test]
    fn test_reveal_never_collapses_siblings() {
        let mut expanded = ExpandedFolders::new();
        expanded.expand("/z");
        expanded.reveal("/a/b");
        assert!(expanded.is_expanded("/z"));
    }

    #[test]
    fn test_toggle() {
        let mut expanded = ExpandedFolders::new();
        assert!(expanded.toggle("/a"));
        assert!(!expanded.toggle("/a"));
        assert!(!expanded.is_expanded("/a"));
    }
}

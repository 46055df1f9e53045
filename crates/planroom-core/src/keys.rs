//! Key builders for all persisted Planroom UI-state entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

use crate::types::ProjectId;

/// Prefix applied to all Planroom UI-state keys.
const PREFIX: &str = "planroom";

/// Key for the per-project expanded-folder-path list (JSON string array).
pub fn expanded_folders(project_id: ProjectId) -> String {
    format!("{PREFIX}:project:{project_id}:expanded")
}

/// Key for the global grid/list view-mode preference.
pub fn view_mode() -> String {
    format!("{PREFIX}:view_mode")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_folders_key_is_project_scoped() {
        let a = expanded_folders(ProjectId::new());
        let b = expanded_folders(ProjectId::new());
        assert_ne!(a, b);
        assert!(a.starts_with("planroom:project:"));
    }
}

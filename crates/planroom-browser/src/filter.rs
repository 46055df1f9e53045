//! The visible-file filter pipeline.
//!
//! Three stages applied in order, each narrowing without reordering:
//! scope (current view), category, then free-text search. Filtering is
//! synchronous and pure over already-fetched records, so keystroke-rate
//! re-filtering is cheap.

use planroom_core::types::CategoryFilter;
use planroom_entity::FileRecord;

use crate::nav::ViewState;

/// Apply scope, category, and search narrowing to the flat collection.
///
/// Folder scope is exact-match containment: a file tagged `/a/b` is never
/// visible at `Folder("/a")` — subfolders are reached by re-navigating,
/// not by recursive listing. A drawing-set view lists sheets, not files.
pub fn visible_files(
    all: &[FileRecord],
    view: &ViewState,
    category: CategoryFilter,
    search: &str,
) -> Vec<FileRecord> {
    let query = search.trim().to_lowercase();
    all.iter()
        .filter(|f| matches_scope(f, view))
        .filter(|f| category.matches(f.category))
        .filter(|f| query.is_empty() || matches_search(f, &query))
        .cloned()
        .collect()
}

/// Whether a file is inside the current view's scope.
pub fn matches_scope(file: &FileRecord, view: &ViewState) -> bool {
    match view {
        ViewState::Root => file.is_at_root(),
        ViewState::Folder { path } => file.canonical_folder_path() == *path,
        ViewState::DrawingSet { .. } => false,
    }
}

/// Whether folder rows are hidden from the item list.
///
/// A free-text search at the root suppresses folder affordances so flat
/// search results are not mixed with navigation rows; searching inside a
/// specific folder keeps its subfolders visible.
pub fn folders_suppressed(view: &ViewState, search: &str) -> bool {
    matches!(view, ViewState::Root) && !search.trim().is_empty()
}

/// Case-insensitive substring match against name, description, or any
/// tag; one matching field passes.
fn matches_search(file: &FileRecord, query_lowercase: &str) -> bool {
    if file.name.to_lowercase().contains(query_lowercase) {
        return true;
    }
    if let Some(desc) = &file.description
        && desc.to_lowercase().contains(query_lowercase)
    {
        return true;
    }
    file.tags
        .iter()
        .any(|t| t.to_lowercase().contains(query_lowercase))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use planroom_core::types::{FileCategory, FileId, ProjectId};

    use super::*;

    fn file(name: &str, folder_path: Option<&str>, category: Option<FileCategory>) -> FileRecord {
        FileRecord {
            id: FileId::new(),
            project_id: ProjectId::new(),
            name: name.to_string(),
            description: None,
            tags: Vec::new(),
            folder_path: folder_path.map(str::to_string),
            category,
            mime_type: None,
            size_bytes: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_root_scope_keeps_only_rootless_files() {
        let all = vec![
            file("a.pdf", None, None),
            file("b.pdf", Some("/plans"), None),
        ];
        let visible = visible_files(&all, &ViewState::Root, CategoryFilter::All, "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "a.pdf");
    }

    #[test]
    fn test_folder_scope_has_no_recursive_leakage() {
        let all = vec![
            file("direct.pdf", Some("/a"), None),
            file("nested.pdf", Some("/a/b"), None),
        ];
        let view = ViewState::Folder {
            path: "/a".to_string(),
        };
        let visible = visible_files(&all, &view, CategoryFilter::All, "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "direct.pdf");
    }

    #[test]
    fn test_category_stage() {
        let all = vec![
            file("p.jpg", None, Some(FileCategory::Photos)),
            file("c.pdf", None, Some(FileCategory::Contracts)),
            file("u.pdf", None, None),
        ];
        let visible = visible_files(
            &all,
            &ViewState::Root,
            CategoryFilter::Category(FileCategory::Photos),
            "",
        );
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "p.jpg");
    }

    #[test]
    fn test_search_matches_any_field() {
        let mut tagged = file("x.pdf", None, None);
        tagged.tags = vec!["Structural".to_string()];
        let mut described = file("y.pdf", None, None);
        described.description = Some("Steel framing detail".to_string());
        let all = vec![tagged, described, file("z-steel.pdf", None, None)];

        let by_tag = visible_files(&all, &ViewState::Root, CategoryFilter::All, "structural");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].name, "x.pdf");

        let by_text = visible_files(&all, &ViewState::Root, CategoryFilter::All, "STEEL");
        assert_eq!(by_text.len(), 2);
    }

    #[test]
    fn test_folder_suppression_rule() {
        let folder = ViewState::Folder {
            path: "/a".to_string(),
        };
        assert!(folders_suppressed(&ViewState::Root, "rfi"));
        assert!(!folders_suppressed(&ViewState::Root, "  "));
        assert!(!folders_suppressed(&folder, "rfi"));
    }

    #[test]
    fn test_drawing_set_view_lists_no_files() {
        let all = vec![file("a.pdf", None, None)];
        let view = ViewState::DrawingSet {
            id: planroom_core::types::DrawingSetId::new(),
            title: None,
        };
        assert!(visible_files(&all, &view, CategoryFilter::All, "").is_empty());
    }
}

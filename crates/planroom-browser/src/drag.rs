//! Drag-and-move coordination.
//!
//! A drag gesture over a folder or breadcrumb target becomes a batched
//! move. The payload token carries a single file identifier; when that
//! file is part of the current selection, the entire selection moves with
//! it, otherwise only the dragged file does. The collaborator interface
//! is batched, but each file is submitted as its own remote call so a
//! partial failure can be reported per item rather than as one boolean.

use std::sync::Arc;

use tracing::{info, warn};

use planroom_core::error::{AppError, ErrorKind};
use planroom_core::path;
use planroom_core::result::AppResult;
use planroom_core::types::{FileId, ProjectId};

use crate::selection::SelectionSet;
use crate::store::ProjectStore;

/// Token type distinguishing internal file drags from native OS file
/// drops (which trigger an upload flow instead).
pub const FILE_DRAG_MIME: &str = "application/x-planroom-file";

/// The ephemeral payload of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    /// The file under the pointer when the drag started.
    pub file_id: FileId,
}

impl DragPayload {
    /// Encode as a transferable token (`<mime>:<file-id>`).
    pub fn encode(&self) -> String {
        format!("{FILE_DRAG_MIME}:{}", self.file_id)
    }

    /// Decode a token produced by [`Self::encode`]. `None` for foreign
    /// payloads such as native file drops.
    pub fn decode(token: &str) -> Option<Self> {
        let id = token.strip_prefix(FILE_DRAG_MIME)?.strip_prefix(':')?;
        id.parse().ok().map(|file_id| Self { file_id })
    }
}

/// The identifiers a drop acts on: the whole selection when the dragged
/// file is selected, only the dragged file otherwise.
pub fn resolve_payload(selection: &SelectionSet, dragged: FileId) -> Vec<FileId> {
    if selection.has(dragged) {
        selection.ids()
    } else {
        vec![dragged]
    }
}

/// Per-item outcome of a batched move.
#[derive(Debug, Default)]
pub struct MoveReport {
    /// Files moved successfully.
    pub moved: Vec<FileId>,
    /// Files that failed, with the error for each.
    pub failed: Vec<(FileId, AppError)>,
}

impl MoveReport {
    /// Whether every file moved.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Executes drops against the storage collaborator.
#[derive(Debug, Clone)]
pub struct DragMoveCoordinator {
    /// The project being browsed.
    project_id: ProjectId,
    /// Storage collaborator.
    store: Arc<dyn ProjectStore>,
}

impl DragMoveCoordinator {
    /// Create a new coordinator.
    pub fn new(project_id: ProjectId, store: Arc<dyn ProjectStore>) -> Self {
        Self { project_id, store }
    }

    /// Move the resolved files to `target` (`None` or a path normalizing
    /// to empty means the root).
    ///
    /// A target folder not yet in `declared_folders` is created first —
    /// permanently, and idempotently: a conflict from a concurrent create
    /// counts as success. No local state is mutated here; callers refresh
    /// from the store afterwards so state reflects server truth only.
    pub async fn move_to(
        &self,
        file_ids: &[FileId],
        target: Option<&str>,
        declared_folders: &[String],
    ) -> AppResult<MoveReport> {
        let canonical = path::normalize(target);
        let target = if canonical.is_empty() {
            None
        } else {
            Some(canonical.as_str())
        };

        if let Some(t) = target {
            let exists = declared_folders
                .iter()
                .any(|p| path::normalize(Some(p)) == t);
            if !exists {
                match self.store.create_folder(self.project_id, t).await {
                    Ok(()) => info!(path = %t, "Created folder for drop target"),
                    Err(e) if e.kind == ErrorKind::Conflict => {}
                    Err(e) => return Err(e),
                }
            }
        }

        let mut report = MoveReport::default();
        for id in file_ids {
            match self.store.move_files(self.project_id, &[*id], target).await {
                Ok(()) => report.moved.push(*id),
                Err(e) => {
                    warn!(file_id = %id, error = %e, "Move failed");
                    report.failed.push((*id, e));
                }
            }
        }

        info!(
            moved = report.moved.len(),
            failed = report.failed.len(),
            target = target.unwrap_or("(root)"),
            "Drop completed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_token_round_trip() {
        let payload = DragPayload {
            file_id: FileId::new(),
        };
        let token = payload.encode();
        assert!(token.starts_with(FILE_DRAG_MIME));
        assert_eq!(DragPayload::decode(&token), Some(payload));
    }

    #[test]
    fn test_foreign_tokens_are_rejected() {
        assert_eq!(DragPayload::decode("text/uri-list:file:///tmp/x"), None);
        assert_eq!(DragPayload::decode("application/x-planroom-file:nope"), None);
    }

    #[test]
    fn test_dragging_selected_file_resolves_whole_selection() {
        let mut selection = SelectionSet::new();
        let ids: Vec<FileId> = (0..3).map(|_| FileId::new()).collect();
        selection.set_many(&ids, true);

        let mut resolved = resolve_payload(&selection, ids[1]);
        resolved.sort_by_key(|id| id.to_string());
        let mut expected = ids.clone();
        expected.sort_by_key(|id| id.to_string());
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_dragging_unselected_file_resolves_only_itself() {
        let mut selection = SelectionSet::new();
        selection.set_many(&[FileId::new(), FileId::new()], true);
        let loner = FileId::new();
        assert_eq!(resolve_payload(&selection, loner), vec![loner]);
    }
}

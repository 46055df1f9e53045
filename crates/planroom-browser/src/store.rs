//! External storage collaborator trait.
//!
//! The navigation core never touches bytes, thumbnails, or a database
//! directly. Everything it needs from the outside world is this flat
//! list/create/move/delete surface, implemented elsewhere (in-memory in
//! `planroom-store`, HTTP-backed in production).

use async_trait::async_trait;

use planroom_core::result::AppResult;
use planroom_core::types::{CategoryFilter, DrawingSetId, FileId, ProjectId};
use planroom_entity::{DrawingSet, FileRecord, Sheet};

/// Trait for the project document service backing the browser.
///
/// `list_files` accepts the active category filter and search query so the
/// server can pre-narrow; the [`crate::filter`] pipeline still applies the
/// same narrowing locally, which keeps stale responses harmless.
#[async_trait]
pub trait ProjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// List file records for a project.
    async fn list_files(
        &self,
        project_id: ProjectId,
        category: CategoryFilter,
        search: Option<&str>,
    ) -> AppResult<Vec<FileRecord>>;

    /// List the declared folder paths for a project (canonical form not
    /// guaranteed; callers normalize).
    async fn list_folders(&self, project_id: ProjectId) -> AppResult<Vec<String>>;

    /// Declare a folder path. Returns a conflict error when the path is
    /// already declared.
    async fn create_folder(&self, project_id: ProjectId, path: &str) -> AppResult<()>;

    /// Move files to a target folder path. `None` clears `folder_path`
    /// (moves to the root).
    async fn move_files(
        &self,
        project_id: ProjectId,
        file_ids: &[FileId],
        target: Option<&str>,
    ) -> AppResult<()>;

    /// Delete file records.
    async fn delete_files(&self, project_id: ProjectId, file_ids: &[FileId]) -> AppResult<()>;

    /// List drawing sets for a project.
    async fn list_drawing_sets(&self, project_id: ProjectId) -> AppResult<Vec<DrawingSet>>;

    /// List the sheets of one drawing set.
    async fn list_sheets(&self, set_id: DrawingSetId) -> AppResult<Vec<Sheet>>;
}

//! In-memory collaborator implementations.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use planroom_browser::store::ProjectStore;
use planroom_core::error::AppError;
use planroom_core::path;
use planroom_core::result::AppResult;
use planroom_core::traits::UiStateStore;
use planroom_core::types::{CategoryFilter, DrawingSetId, FileId, ProjectId};
use planroom_entity::{DrawingSet, FileRecord, Sheet};

/// In-memory project document store.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    /// Project → file records.
    files: DashMap<ProjectId, Vec<FileRecord>>,
    /// Project → declared canonical folder paths.
    folders: DashMap<ProjectId, Vec<String>>,
    /// Project → drawing sets.
    sets: DashMap<ProjectId, Vec<DrawingSet>>,
    /// Set → sheets.
    sheets: DashMap<DrawingSetId, Vec<Sheet>>,
}

impl MemoryProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file record.
    pub fn insert_file(&self, file: FileRecord) {
        self.files.entry(file.project_id).or_default().push(file);
    }

    /// Seed a declared folder path (normalized, duplicates ignored).
    pub fn insert_folder(&self, project_id: ProjectId, raw: &str) {
        let canonical = path::normalize(Some(raw));
        if canonical.is_empty() {
            return;
        }
        let mut folders = self.folders.entry(project_id).or_default();
        if !folders.contains(&canonical) {
            folders.push(canonical);
        }
    }

    /// Seed a drawing set with its sheets.
    pub fn insert_drawing_set(&self, set: DrawingSet, sheets: Vec<Sheet>) {
        self.sheets.insert(set.id, sheets);
        self.sets.entry(set.project_id).or_default().push(set);
    }

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
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn list_files(
        &self,
        project_id: ProjectId,
        category: CategoryFilter,
        search: Option<&str>,
    ) -> AppResult<Vec<FileRecord>> {
        let query = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();
        let files = self
            .files
            .get(&project_id)
            .map(|f| f.clone())
            .unwrap_or_default();
        Ok(files
            .into_iter()
            .filter(|f| category.matches(f.category))
            .filter(|f| query.is_empty() || Self::matches_search(f, &query))
            .collect())
    }

    async fn list_folders(&self, project_id: ProjectId) -> AppResult<Vec<String>> {
        Ok(self
            .folders
            .get(&project_id)
            .map(|f| f.clone())
            .unwrap_or_default())
    }

    async fn create_folder(&self, project_id: ProjectId, raw: &str) -> AppResult<()> {
        let canonical = path::normalize(Some(raw));
        if canonical.is_empty() {
            return Err(AppError::validation("Folder path cannot be empty"));
        }
        let mut folders = self.folders.entry(project_id).or_default();
        if folders.contains(&canonical) {
            return Err(AppError::conflict(format!(
                "A folder at path '{canonical}' already exists"
            )));
        }
        debug!(project_id = %project_id, path = %canonical, "Folder declared");
        folders.push(canonical);
        Ok(())
    }

    async fn move_files(
        &self,
        project_id: ProjectId,
        file_ids: &[FileId],
        target: Option<&str>,
    ) -> AppResult<()> {
        let target = target.map(|t| path::normalize(Some(t))).filter(|t| !t.is_empty());
        let mut files = self
            .files
            .get_mut(&project_id)
            .ok_or_else(|| AppError::not_found("Project not found"))?;
        for id in file_ids {
            let file = files
                .iter_mut()
                .find(|f| f.id == *id)
                .ok_or_else(|| AppError::not_found(format!("File {id} not found")))?;
            file.folder_path = target.clone();
            file.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_files(&self, project_id: ProjectId, file_ids: &[FileId]) -> AppResult<()> {
        let mut files = self
            .files
            .get_mut(&project_id)
            .ok_or_else(|| AppError::not_found("Project not found"))?;
        for id in file_ids {
            let before = files.len();
            files.retain(|f| f.id != *id);
            if files.len() == before {
                return Err(AppError::not_found(format!("File {id} not found")));
            }
        }
        Ok(())
    }

    async fn list_drawing_sets(&self, project_id: ProjectId) -> AppResult<Vec<DrawingSet>> {
        Ok(self
            .sets
            .get(&project_id)
            .map(|s| s.clone())
            .unwrap_or_default())
    }

    async fn list_sheets(&self, set_id: DrawingSetId) -> AppResult<Vec<Sheet>> {
        self.sheets
            .get(&set_id)
            .map(|s| s.clone())
            .ok_or_else(|| AppError::not_found("Drawing set not found"))
    }
}

/// In-memory durable client key-value storage.
#[derive(Debug, Default)]
pub struct MemoryUiStateStore {
    entries: DashMap<String, String>,
}

impl MemoryUiStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UiStateStore for MemoryUiStateStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use planroom_core::types::FileCategory;

    use super::*;

    fn file(project_id: ProjectId, name: &str, category: Option<FileCategory>) -> FileRecord {
        FileRecord {
            id: FileId::new(),
            project_id,
            name: name.to_string(),
            description: None,
            tags: Vec::new(),
            folder_path: None,
            category,
            mime_type: None,
            size_bytes: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_list_files_pre_narrows() {
        let store = MemoryProjectStore::new();
        let project = ProjectId::new();
        store.insert_file(file(project, "site.jpg", Some(FileCategory::Photos)));
        store.insert_file(file(project, "contract.pdf", Some(FileCategory::Contracts)));

        let photos = store
            .list_files(
                project,
                CategoryFilter::Category(FileCategory::Photos),
                None,
            )
            .await
            .unwrap();
        assert_eq!(photos.len(), 1);

        let by_search = store
            .list_files(project, CategoryFilter::All, Some("CONTRACT"))
            .await
            .unwrap();
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].name, "contract.pdf");
    }

    #[tokio::test]
    async fn test_create_folder_conflicts_on_duplicate() {
        let store = MemoryProjectStore::new();
        let project = ProjectId::new();
        store.create_folder(project, "/plans").await.unwrap();
        let err = store.create_folder(project, "plans/").await.unwrap_err();
        assert_eq!(err.kind, planroom_core::error::ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_move_files_to_root_clears_path() {
        let store = MemoryProjectStore::new();
        let project = ProjectId::new();
        let mut f = file(project, "a.pdf", None);
        f.folder_path = Some("/plans".to_string());
        let id = f.id;
        store.insert_file(f);

        store.move_files(project, &[id], None).await.unwrap();
        let files = store
            .list_files(project, CategoryFilter::All, None)
            .await
            .unwrap();
        assert!(files[0].folder_path.is_none());
    }

    #[tokio::test]
    async fn test_ui_state_round_trip() {
        let store = MemoryUiStateStore::new();
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }
}

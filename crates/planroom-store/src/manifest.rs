//! JSON project manifest.
//!
//! A manifest describes one project's files, declared folders, and
//! drawing sets so a browser can be exercised end-to-end without a
//! server. Identifiers and timestamps are generated at load time.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use planroom_core::result::AppResult;
use planroom_core::types::{DrawingSetId, FileCategory, FileId, ProjectId, SheetId};
use planroom_entity::{DrawingSet, FileRecord, Sheet};

use crate::memory::MemoryProjectStore;

/// One file entry in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Display name.
    pub name: String,
    /// Virtual folder path (any form; normalized on use).
    #[serde(default)]
    pub folder_path: Option<String>,
    /// Category tag.
    #[serde(default)]
    pub category: Option<FileCategory>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Searchable tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// MIME type.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size_bytes: i64,
}

/// One sheet entry in a manifest drawing set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestSheet {
    /// Sheet number (e.g., `A-101`).
    pub number: String,
    /// Sheet title.
    pub title: String,
}

/// One drawing set in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestDrawingSet {
    /// Set title.
    pub title: String,
    /// Sheets, in page order.
    #[serde(default)]
    pub sheets: Vec<ManifestSheet>,
}

/// A complete project description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Declared folder paths (may be empty of files).
    #[serde(default)]
    pub folders: Vec<String>,
    /// File records.
    #[serde(default)]
    pub files: Vec<ManifestFile>,
    /// Drawing sets.
    #[serde(default)]
    pub drawing_sets: Vec<ManifestDrawingSet>,
}

impl ProjectManifest {
    /// Read a manifest from a JSON file.
    pub fn from_path(path: &std::path::Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let manifest = serde_json::from_str(&raw)?;
        Ok(manifest)
    }

    /// Seed a store with this manifest under a fresh project ID.
    pub fn seed(&self, store: &MemoryProjectStore) -> ProjectId {
        let project_id = ProjectId::new();
        let now = Utc::now();

        for raw in &self.folders {
            store.insert_folder(project_id, raw);
        }
        for f in &self.files {
            store.insert_file(FileRecord {
                id: FileId::new(),
                project_id,
                name: f.name.clone(),
                description: f.description.clone(),
                tags: f.tags.clone(),
                folder_path: f.folder_path.clone(),
                category: f.category,
                mime_type: f.mime_type.clone(),
                size_bytes: f.size_bytes,
                created_at: now,
                updated_at: now,
            });
        }
        for s in &self.drawing_sets {
            let set_id = DrawingSetId::new();
            let sheets: Vec<Sheet> = s
                .sheets
                .iter()
                .enumerate()
                .map(|(i, sheet)| Sheet {
                    id: SheetId::new(),
                    set_id,
                    number: sheet.number.clone(),
                    title: sheet.title.clone(),
                    page_index: i as u32,
                })
                .collect();
            store.insert_drawing_set(
                DrawingSet {
                    id: set_id,
                    project_id,
                    title: s.title.clone(),
                    sheet_count: sheets.len() as u32,
                    created_at: now,
                },
                sheets,
            );
        }

        info!(
            project_id = %project_id,
            files = self.files.len(),
            folders = self.folders.len(),
            sets = self.drawing_sets.len(),
            "Manifest seeded"
        );
        project_id
    }
}

#[cfg(test)]
mod tests {
    use planroom_browser::store::ProjectStore;
    use planroom_core::types::CategoryFilter;

    use super::*;

    #[tokio::test]
    async fn test_manifest_seeds_store() {
        let json = r#"{
            "folders": ["/contracts"],
            "files": [
                {"name": "prime-contract.pdf", "folder_path": "/contracts", "category": "contracts"},
                {"name": "site-photo.jpg"}
            ],
            "drawing_sets": [
                {"title": "Architectural", "sheets": [{"number": "A-101", "title": "Floor Plan"}]}
            ]
        }"#;
        let manifest: ProjectManifest = serde_json::from_str(json).unwrap();
        let store = MemoryProjectStore::new();
        let project = manifest.seed(&store);

        let files = store
            .list_files(project, CategoryFilter::All, None)
            .await
            .unwrap();
        assert_eq!(files.len(), 2);

        let folders = store.list_folders(project).await.unwrap();
        assert_eq!(folders, vec!["/contracts".to_string()]);

        let sets = store.list_drawing_sets(project).await.unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].sheet_count, 1);

        let sheets = store.list_sheets(sets[0].id).await.unwrap();
        assert_eq!(sheets[0].number, "A-101");
        assert_eq!(sheets[0].page_index, 0);
    }
}

//! File record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use planroom_core::path;
use planroom_core::types::{FileCategory, FileId, ProjectId};

/// A project document in the flat file collection.
///
/// Owned by the external storage collaborator; the navigation core treats
/// every record as immutable input per refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique file identifier.
    pub id: FileId,
    /// The project this file belongs to.
    pub project_id: ProjectId,
    /// Display name (including extension).
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Searchable tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Virtual folder path tag. `None` or empty means the root.
    pub folder_path: Option<String>,
    /// Category tag, if any.
    pub category: Option<FileCategory>,
    /// MIME type of the file.
    pub mime_type: Option<String>,
    /// File size in bytes.
    pub size_bytes: i64,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
}

impl FileRecord {
    /// The canonical form of this file's folder path (`""` = root).
    pub fn canonical_folder_path(&self) -> String {
        path::normalize(self.folder_path.as_deref())
    }

    /// Whether the file lives directly at the root.
    pub fn is_at_root(&self) -> bool {
        self.canonical_folder_path().is_empty()
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(folder_path: Option<&str>) -> FileRecord {
        FileRecord {
            id: FileId::new(),
            project_id: ProjectId::new(),
            name: "a101.pdf".to_string(),
            description: None,
            tags: Vec::new(),
            folder_path: folder_path.map(str::to_string),
            category: None,
            mime_type: Some("application/pdf".to_string()),
            size_bytes: 1024,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_canonical_folder_path() {
        assert_eq!(record(None).canonical_folder_path(), "");
        assert_eq!(record(Some("/")).canonical_folder_path(), "");
        assert_eq!(record(Some("plans//rev-a/")).canonical_folder_path(), "/plans/rev-a");
    }

    #[test]
    fn test_is_at_root() {
        assert!(record(None).is_at_root());
        assert!(record(Some("  ")).is_at_root());
        assert!(!record(Some("/plans")).is_at_root());
    }

    #[test]
    fn test_extension() {
        assert_eq!(record(None).extension(), Some("pdf".to_string()));
    }
}

//! The discriminated browse-item union.
//!
//! One visible list mixes folders, files, and drawing sets. Representing
//! the variants as a tagged union forces exhaustive matching at render
//! and action-dispatch sites instead of duck-typed optional fields.

use serde::{Deserialize, Serialize};

use crate::drawing_set::DrawingSet;
use crate::file::FileRecord;
use crate::folder::FolderNode;

/// One entry in the visible item list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BrowseItem {
    /// A folder affordance (direct child of the current scope).
    Folder(FolderNode),
    /// A plain file row.
    File(FileRecord),
    /// A drawing-set entry.
    DrawingSet(DrawingSet),
}

impl BrowseItem {
    /// Display label for the item.
    pub fn label(&self) -> &str {
        match self {
            Self::Folder(node) => &node.name,
            Self::File(file) => &file.name,
            Self::DrawingSet(set) => &set.title,
        }
    }
}

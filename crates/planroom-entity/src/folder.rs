//! Folder tree node for hierarchical display.
//!
//! Folders are virtual: a node exists for every canonical path implied by
//! the declared folder list or by a file's `folder_path` tag. The whole
//! tree is rebuilt as an immutable snapshot on every input change and is
//! never mutated in place.

use serde::{Deserialize, Serialize};

/// A node in the virtual folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Leaf segment of the path.
    pub name: String,
    /// Full canonical path.
    pub path: String,
    /// Number of files directly at this path (not recursive).
    pub item_count: u64,
    /// Child folder nodes, in lexicographic order.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Total number of nodes in this subtree, including self.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FolderNode::subtree_size)
            .sum::<usize>()
    }
}

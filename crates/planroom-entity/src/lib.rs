//! # planroom-entity
//!
//! Domain entity models for Planroom: file records, folder tree nodes,
//! drawing sets and their sheets, and the discriminated browse-item union.

pub mod drawing_set;
pub mod file;
pub mod folder;
pub mod item;

pub use drawing_set::{DrawingSet, Sheet};
pub use file::FileRecord;
pub use folder::FolderNode;
pub use item::BrowseItem;

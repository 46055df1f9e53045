//! Core type definitions used across the Planroom workspace.

pub mod category;
pub mod id;
pub mod view_mode;

pub use category::{CategoryFilter, FileCategory};
pub use id::*;
pub use view_mode::ViewMode;

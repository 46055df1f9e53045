//! # planroom-browser
//!
//! The navigation and hierarchy core of Planroom. Converts a flat,
//! unordered collection of folder-path strings and file records into a
//! consistent tree, keeps a single source of navigational truth (current
//! folder / selected drawing set / search / category filter) synchronized
//! with the URL query and persisted UI state, and mediates multi-file
//! drag-and-move operations with correct selection semantics.
//!
//! Byte storage, sheet generation, and server persistence live behind the
//! [`store::ProjectStore`] collaborator trait.

pub mod browser;
pub mod drag;
pub mod filter;
pub mod nav;
pub mod selection;
pub mod store;
pub mod tree;

pub use browser::{DeleteReport, ProjectBrowser};
pub use drag::{DragMoveCoordinator, DragPayload, MoveReport};
pub use nav::{ExpandedFolders, NavigationStateMachine, UrlQuery, ViewState};
pub use selection::SelectionSet;
pub use store::ProjectStore;

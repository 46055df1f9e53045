//! Navigation state: the current view, its URL synchronization, and the
//! persisted expanded-folder side state.

pub mod expansion;
pub mod machine;
pub mod query;

pub use expansion::ExpandedFolders;
pub use machine::{NavigationStateMachine, ViewState};
pub use query::UrlQuery;

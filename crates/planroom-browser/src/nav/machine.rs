//! The navigation state machine.
//!
//! Owns the single current view — root, folder path, or drawing set —
//! plus the orthogonal category filter and search query. All transitions
//! are explicit actions; each one swaps the whole discriminated view
//! atomically so a half-updated "path set but drawing-set also set"
//! condition cannot exist.
//!
//! The URL is a second writer of this state (browser back/forward, deep
//! links). Inbound changes re-derive the view through [`Self::sync_from_query`],
//! guarded by a last-synced key so outbound pushes the machine itself
//! performed are not re-processed as new inbound events.

use serde::{Deserialize, Serialize};
use tracing::info;

use planroom_core::path;
use planroom_core::types::{CategoryFilter, DrawingSetId};

use super::query::UrlQuery;

/// The current view, exactly one variant at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewState {
    /// The project root.
    Root,
    /// Inside a virtual folder.
    Folder {
        /// Canonical folder path.
        path: String,
    },
    /// A drawing set is open.
    DrawingSet {
        /// The set identifier.
        id: DrawingSetId,
        /// The set title; `None` until resolved (deep links carry only
        /// the identifier).
        title: Option<String>,
    },
}

/// Navigation state machine.
#[derive(Debug, Clone)]
pub struct NavigationStateMachine {
    /// The current view.
    view: ViewState,
    /// Orthogonal category filter.
    category: CategoryFilter,
    /// Orthogonal free-text search query.
    search: String,
    /// Sync key of the last outbound push or applied inbound query.
    last_synced: Option<String>,
}

impl Default for NavigationStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStateMachine {
    /// A machine at the root with no filters.
    pub fn new() -> Self {
        Self {
            view: ViewState::Root,
            category: CategoryFilter::All,
            search: String::new(),
            last_synced: None,
        }
    }

    /// The current view.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The current category filter.
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// The current search query.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Go to the project root. Clears the category filter and any
    /// drawing-set selection; the returned query removes both parameters.
    pub fn navigate_to_root(&mut self) -> UrlQuery {
        self.view = ViewState::Root;
        self.category = CategoryFilter::All;
        self.push(UrlQuery::root())
    }

    /// Go to a folder. The path is normalized; an empty canonical path is
    /// the root. Applies the same resets as [`Self::navigate_to_root`].
    pub fn navigate_to_folder(&mut self, raw_path: &str) -> UrlQuery {
        let canonical = path::normalize(Some(raw_path));
        if canonical.is_empty() {
            return self.navigate_to_root();
        }
        info!(path = %canonical, "Navigating to folder");
        self.view = ViewState::Folder {
            path: canonical.clone(),
        };
        self.category = CategoryFilter::All;
        self.push(UrlQuery::folder(&canonical))
    }

    /// Open a drawing set. Forces the category filter to the drawing-set
    /// pseudo-category and clears any folder path.
    pub fn navigate_to_drawing_set(&mut self, id: DrawingSetId, title: Option<String>) -> UrlQuery {
        info!(set_id = %id, "Navigating to drawing set");
        self.view = ViewState::DrawingSet { id, title };
        self.category = CategoryFilter::DrawingSets;
        self.push(UrlQuery::drawing_set(id))
    }

    /// Change the category filter. Does not touch the view.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Change the search query. Does not touch the view.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Fill in the title of the active drawing set once it is known.
    pub fn resolve_set_title(&mut self, resolved: &str) {
        if let ViewState::DrawingSet { title, .. } = &mut self.view {
            *title = Some(resolved.to_string());
        }
    }

    /// Apply an inbound URL change (back/forward, deep link).
    ///
    /// Returns `false` when the query matches the last synced key — that
    /// is an echo of an outbound push this machine performed, and
    /// re-processing it would start a push→observe→re-push loop. Returns
    /// `true` when a genuinely new state was applied (with the same
    /// resets as the explicit transitions).
    pub fn sync_from_query(&mut self, query: &UrlQuery) -> bool {
        let key = query.sync_key();
        if self.last_synced.as_deref() == Some(key.as_str()) {
            return false;
        }
        if let Some(id) = query.set {
            self.view = ViewState::DrawingSet { id, title: None };
            self.category = CategoryFilter::DrawingSets;
        } else if let Some(p) = &query.path {
            self.view = ViewState::Folder {
                path: path::normalize(Some(p)),
            };
            self.category = CategoryFilter::All;
        } else {
            self.view = ViewState::Root;
            self.category = CategoryFilter::All;
        }
        self.last_synced = Some(key);
        true
    }

    fn push(&mut self, query: UrlQuery) -> UrlQuery {
        self.last_synced = Some(query.sync_key());
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_navigation_normalizes() {
        let mut nav = NavigationStateMachine::new();
        let query = nav.navigate_to_folder("a/b/");
        assert_eq!(
            nav.view(),
            &ViewState::Folder {
                path: "/a/b".to_string()
            }
        );
        assert_eq!(query.path.as_deref(), Some("/a/b"));
    }

    #[test]
    fn test_empty_folder_path_degrades_to_root() {
        let mut nav = NavigationStateMachine::new();
        let query = nav.navigate_to_folder("  / ");
        assert_eq!(nav.view(), &ViewState::Root);
        assert_eq!(query, UrlQuery::root());
    }

    #[test]
    fn test_drawing_set_forces_pseudo_category_and_clears_path() {
        let mut nav = NavigationStateMachine::new();
        nav.navigate_to_folder("/plans");
        let id = DrawingSetId::new();
        let query = nav.navigate_to_drawing_set(id, Some("A-Series".to_string()));
        assert!(matches!(nav.view(), ViewState::DrawingSet { .. }));
        assert_eq!(nav.category(), CategoryFilter::DrawingSets);
        assert!(query.path.is_none());
        assert_eq!(query.set, Some(id));
    }

    #[test]
    fn test_root_clears_category() {
        let mut nav = NavigationStateMachine::new();
        nav.navigate_to_drawing_set(DrawingSetId::new(), None);
        nav.navigate_to_root();
        assert_eq!(nav.view(), &ViewState::Root);
        assert_eq!(nav.category(), CategoryFilter::All);
    }

    #[test]
    fn test_outbound_echo_is_ignored() {
        let mut nav = NavigationStateMachine::new();
        let query = nav.navigate_to_folder("/a/b");
        // The browser observes its own push and reports it back.
        assert!(!nav.sync_from_query(&query));
        assert_eq!(
            nav.view(),
            &ViewState::Folder {
                path: "/a/b".to_string()
            }
        );
    }

    #[test]
    fn test_inbound_back_button_is_applied() {
        let mut nav = NavigationStateMachine::new();
        nav.navigate_to_folder("/a/b");
        // Back to the previous history entry.
        assert!(nav.sync_from_query(&UrlQuery::folder("/a")));
        assert_eq!(
            nav.view(),
            &ViewState::Folder {
                path: "/a".to_string()
            }
        );
        // Re-delivery of the same entry is then an echo.
        assert!(!nav.sync_from_query(&UrlQuery::folder("/a")));
    }

    #[test]
    fn test_round_trip_through_query() {
        let mut nav = NavigationStateMachine::new();
        let query = nav.navigate_to_folder("/a/b");
        let reparsed = UrlQuery::parse(&query.to_query_string());

        let mut other = NavigationStateMachine::new();
        assert!(other.sync_from_query(&reparsed));
        assert_eq!(
            other.view(),
            &ViewState::Folder {
                path: "/a/b".to_string()
            }
        );
    }

    #[test]
    fn test_category_and_search_do_not_touch_view() {
        let mut nav = NavigationStateMachine::new();
        nav.navigate_to_folder("/a");
        nav.set_category(CategoryFilter::All);
        nav.set_search("rfi");
        assert_eq!(
            nav.view(),
            &ViewState::Folder {
                path: "/a".to_string()
            }
        );
    }
}

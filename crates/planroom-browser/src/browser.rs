//! The project browser orchestrator.
//!
//! Wires the navigation state machine, selection, expanded-folder side
//! state, and the last-fetched collections against the storage and
//! UI-state collaborators. All mutations happen in response to discrete
//! events; collaborator I/O is awaited, never blocking. Refreshes are not
//! cancelled on navigation away: a stale response is still applied
//! (last-write-wins, it reflects real server state) and is rescoped by
//! the next filter pass regardless of which view triggered it.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{info, warn};

use planroom_core::config::browser::BrowserConfig;
use planroom_core::error::AppError;
use planroom_core::events::{BrowserEvent, ChangeKind, EventBus};
use planroom_core::keys;
use planroom_core::path;
use planroom_core::result::AppResult;
use planroom_core::traits::UiStateStore;
use planroom_core::types::{CategoryFilter, DrawingSetId, FileId, ProjectId, ViewMode};
use planroom_entity::{BrowseItem, DrawingSet, FileRecord, FolderNode, Sheet};

use crate::drag::{self, DragMoveCoordinator, DragPayload, MoveReport};
use crate::filter;
use crate::nav::{ExpandedFolders, NavigationStateMachine, UrlQuery, ViewState};
use crate::selection::SelectionSet;
use crate::store::ProjectStore;
use crate::tree;

/// Per-item outcome of a bulk delete.
#[derive(Debug, Default)]
pub struct DeleteReport {
    /// Files deleted successfully.
    pub deleted: Vec<FileId>,
    /// Files that failed, with the error for each.
    pub failed: Vec<(FileId, AppError)>,
}

/// Headless browser state for one project.
#[derive(Debug)]
pub struct ProjectBrowser {
    /// The project being browsed.
    project_id: ProjectId,
    /// Storage collaborator.
    store: Arc<dyn ProjectStore>,
    /// Persisted UI-state collaborator.
    ui_state: Arc<dyn UiStateStore>,
    /// Change broadcast bus.
    events: Arc<EventBus>,
    /// Drop executor.
    mover: DragMoveCoordinator,
    /// Navigation state machine.
    nav: NavigationStateMachine,
    /// Selected files.
    selection: SelectionSet,
    /// Expanded-folder side state.
    expanded: ExpandedFolders,
    /// Grid/list preference.
    view_mode: ViewMode,
    /// Last-fetched file collection.
    files: Vec<FileRecord>,
    /// Last-fetched declared folder paths, canonical and deduplicated.
    folders: Vec<String>,
    /// Last-fetched drawing sets.
    drawing_sets: Vec<DrawingSet>,
    /// Sheets per set, filled lazily on first open.
    sheets: HashMap<DrawingSetId, Vec<Sheet>>,
    /// Sets with a sheet fetch in flight. At most one concurrent load per
    /// set; repeat opens while loading are no-ops.
    sheets_loading: HashSet<DrawingSetId>,
}

impl ProjectBrowser {
    /// Create a browser with empty collections. Call [`Self::init`] to
    /// load persisted state and fetch.
    pub fn new(
        project_id: ProjectId,
        store: Arc<dyn ProjectStore>,
        ui_state: Arc<dyn UiStateStore>,
        events: Arc<EventBus>,
        config: &BrowserConfig,
    ) -> Self {
        Self {
            project_id,
            mover: DragMoveCoordinator::new(project_id, store.clone()),
            store,
            ui_state,
            events,
            nav: NavigationStateMachine::new(),
            selection: SelectionSet::new(),
            expanded: ExpandedFolders::new(),
            view_mode: config.default_view_mode,
            files: Vec::new(),
            folders: Vec::new(),
            drawing_sets: Vec::new(),
            sheets: HashMap::new(),
            sheets_loading: HashSet::new(),
        }
    }

    /// Initialize from persisted UI state and the inbound URL, then fetch
    /// the initial collections.
    pub async fn init(&mut self, inbound: &UrlQuery) -> AppResult<()> {
        self.expanded = ExpandedFolders::load(self.ui_state.as_ref(), self.project_id).await?;
        if let Some(raw) = self.ui_state.get(&keys::view_mode()).await?
            && let Ok(mode) = raw.parse::<ViewMode>()
        {
            self.view_mode = mode;
        }

        self.nav.sync_from_query(inbound);
        if let ViewState::Folder { path } = self.nav.view().clone() {
            self.expanded.reveal(&path);
            self.persist_expansion().await?;
        }

        self.refresh().await?;
        self.refresh_drawing_sets().await?;
        self.resolve_active_set_title();
        Ok(())
    }

    // ── Accessors ──────────────────────────────────────────

    /// The project this browser serves.
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// The current view.
    pub fn view(&self) -> &ViewState {
        self.nav.view()
    }

    /// The current category filter.
    pub fn category(&self) -> CategoryFilter {
        self.nav.category()
    }

    /// The current search query.
    pub fn search(&self) -> &str {
        self.nav.search()
    }

    /// The grid/list preference.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The expanded-folder side state.
    pub fn expanded(&self) -> &ExpandedFolders {
        &self.expanded
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The last-fetched flat file collection, unscoped.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// The last-fetched declared folder paths, canonical and sorted.
    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    /// Last-fetched drawing sets.
    pub fn drawing_sets(&self) -> &[DrawingSet] {
        &self.drawing_sets
    }

    /// Sheets of a set, if already loaded.
    pub fn sheets_for(&self, set_id: DrawingSetId) -> Option<&[Sheet]> {
        self.sheets.get(&set_id).map(Vec::as_slice)
    }

    /// The full folder tree for the side explorer, rebuilt from the
    /// current collections as an immutable snapshot.
    pub fn folder_tree(&self) -> Vec<FolderNode> {
        tree::build(&self.folders, &self.files)
    }

    /// Files surviving scope + category + search for the current view.
    pub fn visible_files(&self) -> Vec<FileRecord> {
        filter::visible_files(
            &self.files,
            self.nav.view(),
            self.nav.category(),
            self.nav.search(),
        )
    }

    /// The visible item list: folder rows (unless suppressed), then file
    /// rows — or drawing sets under the pseudo-category at root.
    pub fn visible_items(&self) -> Vec<BrowseItem> {
        match self.nav.view() {
            // A drawing-set view lists sheets, fetched separately.
            ViewState::DrawingSet { .. } => Vec::new(),
            ViewState::Root if self.nav.category() == CategoryFilter::DrawingSets => {
                let query = self.nav.search().trim().to_lowercase();
                self.drawing_sets
                    .iter()
                    .filter(|s| query.is_empty() || s.title.to_lowercase().contains(&query))
                    .cloned()
                    .map(BrowseItem::DrawingSet)
                    .collect()
            }
            view => {
                let mut items = Vec::new();
                if !filter::folders_suppressed(view, self.nav.search()) {
                    let scope = match view {
                        ViewState::Folder { path } => path.as_str(),
                        _ => "",
                    };
                    items.extend(
                        tree::child_folders(&self.folders, &self.files, scope)
                            .into_iter()
                            .map(BrowseItem::Folder),
                    );
                }
                items.extend(self.visible_files().into_iter().map(BrowseItem::File));
                items
            }
        }
    }

    /// How many selected files are currently visible.
    pub fn selected_visible_count(&self) -> usize {
        self.selection.visible_count(&self.visible_files())
    }

    // ── Navigation ─────────────────────────────────────────

    /// Go to the project root. Returns the outbound query to push.
    pub async fn navigate_to_root(&mut self) -> AppResult<UrlQuery> {
        let query = self.nav.navigate_to_root();
        self.after_navigation().await?;
        Ok(query)
    }

    /// Go to a folder, revealing it in the explorer tree and persisting
    /// the expansion. Returns the outbound query to push.
    pub async fn navigate_to_folder(&mut self, raw_path: &str) -> AppResult<UrlQuery> {
        let query = self.nav.navigate_to_folder(raw_path);
        if let ViewState::Folder { path } = self.nav.view().clone() {
            self.expanded.reveal(&path);
            self.persist_expansion().await?;
        }
        self.after_navigation().await?;
        Ok(query)
    }

    /// Open a drawing set and start loading its sheets. Returns the
    /// outbound query to push.
    pub async fn navigate_to_drawing_set(
        &mut self,
        id: DrawingSetId,
        title: Option<String>,
    ) -> AppResult<UrlQuery> {
        let query = self.nav.navigate_to_drawing_set(id, title);
        self.after_navigation().await?;
        self.resolve_active_set_title();
        self.load_sheets(id).await?;
        Ok(query)
    }

    /// Apply an inbound URL change (back/forward, deep link). Returns
    /// `false` for echoes of this browser's own pushes.
    pub async fn handle_url_change(&mut self, query: &UrlQuery) -> AppResult<bool> {
        if !self.nav.sync_from_query(query) {
            return Ok(false);
        }
        if let ViewState::Folder { path } = self.nav.view().clone() {
            self.expanded.reveal(&path);
            self.persist_expansion().await?;
        }
        self.after_navigation().await?;
        self.resolve_active_set_title();
        Ok(true)
    }

    /// Toggle a folder in the explorer tree and persist the result.
    pub async fn toggle_folder_expansion(&mut self, raw_path: &str) -> AppResult<bool> {
        let now_expanded = self.expanded.toggle(raw_path);
        self.persist_expansion().await?;
        Ok(now_expanded)
    }

    // ── Filters ────────────────────────────────────────────

    /// Change the category filter and refetch. Keeps the selection.
    pub async fn set_category(&mut self, category: CategoryFilter) -> AppResult<()> {
        self.nav.set_category(category);
        self.refresh().await
    }

    /// Change the search query and refetch. Keeps the selection.
    pub async fn set_search(&mut self, search: impl Into<String>) -> AppResult<()> {
        self.nav.set_search(search);
        self.refresh().await
    }

    /// Change and persist the grid/list preference.
    pub async fn set_view_mode(&mut self, mode: ViewMode) -> AppResult<()> {
        self.view_mode = mode;
        self.ui_state
            .set(&keys::view_mode(), &mode.to_string())
            .await
    }

    // ── Selection ──────────────────────────────────────────

    /// Flip one file in or out of the selection.
    pub fn toggle_selection(&mut self, id: FileId) {
        self.selection.toggle(id);
    }

    /// Select or deselect every currently visible file. Out-of-scope
    /// files are never touched.
    pub fn select_all_visible(&mut self, selected: bool) {
        let visible_ids: Vec<FileId> = self.visible_files().iter().map(|f| f.id).collect();
        self.selection.set_many(&visible_ids, selected);
    }

    /// Empty the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ── Drag and drop ──────────────────────────────────────

    /// Start a drag from a file row.
    pub fn begin_drag(&self, file_id: FileId) -> DragPayload {
        DragPayload { file_id }
    }

    /// Handle a drop on a folder or breadcrumb target (`None` = root).
    ///
    /// Resolves the payload against the selection, moves, clears the
    /// selection, and refreshes so local state reflects only post-refresh
    /// server truth.
    pub async fn drop_on(
        &mut self,
        payload: DragPayload,
        target: Option<&str>,
    ) -> AppResult<MoveReport> {
        let ids = drag::resolve_payload(&self.selection, payload.file_id);
        let report = self.mover.move_to(&ids, target, &self.folders).await?;

        self.selection.clear();
        self.refresh().await?;
        self.publish(ChangeKind::Files).await;
        self.publish(ChangeKind::Folders).await;
        Ok(report)
    }

    // ── Folder and file operations ─────────────────────────

    /// Declare a new folder under the current scope.
    ///
    /// A name that normalizes to empty is rejected before any collaborator
    /// call.
    pub async fn create_folder(&mut self, raw: &str) -> AppResult<String> {
        if path::normalize(Some(raw)).is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }
        let base = match self.nav.view() {
            ViewState::Folder { path } => path.as_str(),
            _ => "",
        };
        let canonical = path::join(base, raw);
        self.store.create_folder(self.project_id, &canonical).await?;
        info!(path = %canonical, "Folder created");

        self.refresh().await?;
        self.publish(ChangeKind::Folders).await;
        Ok(canonical)
    }

    /// Delete every selected file, one remote call per item so partial
    /// failures are reported per file.
    pub async fn delete_selected(&mut self) -> AppResult<DeleteReport> {
        let ids = self.selection.ids();
        let mut report = DeleteReport::default();
        for id in ids {
            match self.store.delete_files(self.project_id, &[id]).await {
                Ok(()) => report.deleted.push(id),
                Err(e) => {
                    warn!(file_id = %id, error = %e, "Delete failed");
                    report.failed.push((id, e));
                }
            }
        }

        self.selection.clear();
        self.refresh().await?;
        self.publish(ChangeKind::Files).await;
        Ok(report)
    }

    // ── Drawing sets ───────────────────────────────────────

    /// Fetch the sheets of a set unless they are already loaded or a
    /// fetch is in flight.
    pub async fn load_sheets(&mut self, set_id: DrawingSetId) -> AppResult<()> {
        if self.sheets.contains_key(&set_id) || !self.sheets_loading.insert(set_id) {
            return Ok(());
        }
        let result = self.store.list_sheets(set_id).await;
        self.sheets_loading.remove(&set_id);
        let sheets = result?;
        info!(set_id = %set_id, count = sheets.len(), "Sheets loaded");
        self.sheets.insert(set_id, sheets);
        Ok(())
    }

    /// Refetch the drawing-set list.
    pub async fn refresh_drawing_sets(&mut self) -> AppResult<()> {
        self.drawing_sets = self.store.list_drawing_sets(self.project_id).await?;
        Ok(())
    }

    // ── Refresh ────────────────────────────────────────────

    /// Refetch files and folders with the active category and search.
    /// Applied unconditionally: a response arriving after the user moved
    /// on still reflects server state and is rescoped on the next render.
    pub async fn refresh(&mut self) -> AppResult<()> {
        let search = self.nav.search().trim();
        let search = (!search.is_empty()).then_some(search.to_string());
        self.files = self
            .store
            .list_files(self.project_id, self.nav.category(), search.as_deref())
            .await?;

        let mut folders: Vec<String> = self
            .store
            .list_folders(self.project_id)
            .await?
            .iter()
            .map(|p| path::normalize(Some(p)))
            .filter(|p| !p.is_empty())
            .collect();
        folders.sort_unstable();
        folders.dedup();
        self.folders = folders;
        Ok(())
    }

    // ── Internals ──────────────────────────────────────────

    async fn after_navigation(&mut self) -> AppResult<()> {
        // Selection never survives a view transition.
        self.selection.clear();
        self.refresh().await?;
        self.publish(ChangeKind::Navigation).await;
        Ok(())
    }

    fn resolve_active_set_title(&mut self) {
        let pending = match self.nav.view() {
            ViewState::DrawingSet { id, title: None } => Some(*id),
            _ => None,
        };
        if let Some(id) = pending
            && let Some(set) = self.drawing_sets.iter().find(|s| s.id == id)
        {
            let resolved = set.title.clone();
            self.nav.resolve_set_title(&resolved);
        }
    }

    async fn persist_expansion(&mut self) -> AppResult<()> {
        self.expanded
            .save(self.ui_state.as_ref(), self.project_id)
            .await
    }

    async fn publish(&self, kind: ChangeKind) {
        self.events
            .publish(BrowserEvent::new(self.project_id, kind))
            .await;
    }
}

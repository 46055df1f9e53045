//! Browser behavior configuration.

use serde::{Deserialize, Serialize};

use crate::types::ViewMode;

/// Settings for the navigation core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// View mode used before any preference has been persisted.
    #[serde(default)]
    pub default_view_mode: ViewMode,
    /// Buffer size for per-project event channels.
    #[serde(default = "default_event_buffer")]
    pub event_buffer_size: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            default_view_mode: ViewMode::default(),
            event_buffer_size: default_event_buffer(),
        }
    }
}

fn default_event_buffer() -> usize {
    64
}

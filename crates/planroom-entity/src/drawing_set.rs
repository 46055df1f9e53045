//! Drawing set and sheet models.
//!
//! A drawing set is a logical grouping of sheets derived from one
//! uploaded plan PDF, navigated as an alternative to folder browsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use planroom_core::types::{DrawingSetId, ProjectId, SheetId};

/// A set of plan sheets split from one uploaded PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingSet {
    /// Unique drawing-set identifier.
    pub id: DrawingSetId,
    /// The project this set belongs to.
    pub project_id: ProjectId,
    /// Display title (usually the source PDF name).
    pub title: String,
    /// Number of sheets in the set.
    pub sheet_count: u32,
    /// When the set was created.
    pub created_at: DateTime<Utc>,
}

/// One sheet within a drawing set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    /// Unique sheet identifier.
    pub id: SheetId,
    /// The set this sheet belongs to.
    pub set_id: DrawingSetId,
    /// Sheet number as printed on the title block (e.g., `A-101`).
    pub number: String,
    /// Sheet title.
    pub title: String,
    /// Zero-based position within the source PDF.
    pub page_index: u32,
}

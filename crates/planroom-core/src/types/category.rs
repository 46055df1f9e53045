//! File categories and the category filter applied to the visible list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The fixed set of document categories used on construction projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    /// Engineering plans and drawings.
    Plans,
    /// Project specifications.
    Specifications,
    /// Contracts and change orders.
    Contracts,
    /// Permits and regulatory filings.
    Permits,
    /// Jobsite photos.
    Photos,
    /// Inspection and progress reports.
    Reports,
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Plans => "plans",
            Self::Specifications => "specifications",
            Self::Contracts => "contracts",
            Self::Permits => "permits",
            Self::Photos => "photos",
            Self::Reports => "reports",
        };
        write!(f, "{s}")
    }
}

impl FromStr for FileCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plans" => Ok(Self::Plans),
            "specifications" | "specs" => Ok(Self::Specifications),
            "contracts" => Ok(Self::Contracts),
            "permits" => Ok(Self::Permits),
            "photos" => Ok(Self::Photos),
            "reports" => Ok(Self::Reports),
            other => Err(AppError::validation(format!(
                "Unknown file category '{other}'"
            ))),
        }
    }
}

/// The category filter orthogonal to the current view.
///
/// `DrawingSets` is a pseudo-category: it is forced when a drawing set is
/// selected and matches no plain file record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No category narrowing.
    #[default]
    All,
    /// Only the drawing-set pseudo-category.
    DrawingSets,
    /// Only files tagged with one concrete category.
    Category(FileCategory),
}

impl CategoryFilter {
    /// Whether a file's category tag passes this filter.
    pub fn matches(&self, category: Option<FileCategory>) -> bool {
        match self {
            Self::All => true,
            Self::DrawingSets => false,
            Self::Category(wanted) => category == Some(*wanted),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::DrawingSets => write!(f, "drawing_sets"),
            Self::Category(c) => write!(f, "{c}"),
        }
    }
}

//! Drawing-set commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use planroom_browser::ProjectBrowser;
use planroom_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the sets command
#[derive(Debug, Args)]
pub struct SetsArgs {
    /// Print the sheets of the set with this title instead of the set list
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Drawing-set display row
#[derive(Debug, Serialize, Tabled)]
struct SetRow {
    /// Set title
    title: String,
    /// Sheet count
    sheets: u32,
    /// Created at
    created_at: String,
}

/// Sheet display row
#[derive(Debug, Serialize, Tabled)]
struct SheetRow {
    /// Sheet number
    number: String,
    /// Sheet title
    title: String,
    /// Page index in the source PDF
    page: u32,
}

/// Execute the sets command
pub async fn execute(
    browser: &mut ProjectBrowser,
    args: &SetsArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.title {
        None => {
            let rows: Vec<SetRow> = browser
                .drawing_sets()
                .iter()
                .map(|s| SetRow {
                    title: s.title.clone(),
                    sheets: s.sheet_count,
                    created_at: s.created_at.to_rfc3339(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        Some(title) => {
            let set = browser
                .drawing_sets()
                .iter()
                .find(|s| s.title.eq_ignore_ascii_case(title))
                .cloned()
                .ok_or_else(|| AppError::not_found(format!("No drawing set titled '{title}'")))?;

            browser
                .navigate_to_drawing_set(set.id, Some(set.title.clone()))
                .await?;

            let rows: Vec<SheetRow> = browser
                .sheets_for(set.id)
                .unwrap_or_default()
                .iter()
                .map(|sheet| SheetRow {
                    number: sheet.number.clone(),
                    title: sheet.title.clone(),
                    page: sheet.page_index,
                })
                .collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}

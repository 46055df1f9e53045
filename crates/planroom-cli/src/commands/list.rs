//! Folder listing and search commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use planroom_browser::ProjectBrowser;
use planroom_core::error::AppError;
use planroom_core::types::{CategoryFilter, FileCategory};
use planroom_entity::BrowseItem;

use crate::output::{self, OutputFormat};

/// Arguments for the ls command
#[derive(Debug, Args)]
pub struct LsArgs {
    /// Folder path to list (omit for the root)
    pub path: Option<String>,

    /// Narrow to one category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search query (name, description, tags)
    pub query: String,

    /// Folder path to search in (omit for the root)
    #[arg(short, long)]
    pub path: Option<String>,
}

/// One row in the item list
#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    /// Item kind
    kind: &'static str,
    /// Display name
    name: String,
    /// Folder path or item detail
    detail: String,
    /// Category tag
    category: String,
    /// Size in bytes (empty for folders and sets)
    size: String,
}

impl From<&BrowseItem> for ItemRow {
    fn from(item: &BrowseItem) -> Self {
        match item {
            BrowseItem::Folder(node) => Self {
                kind: "folder",
                name: node.name.clone(),
                detail: format!("{} items", node.item_count),
                category: String::new(),
                size: String::new(),
            },
            BrowseItem::File(file) => Self {
                kind: "file",
                name: file.name.clone(),
                detail: file.canonical_folder_path(),
                category: file.category.map(|c| c.to_string()).unwrap_or_default(),
                size: file.size_bytes.to_string(),
            },
            BrowseItem::DrawingSet(set) => Self {
                kind: "set",
                name: set.title.clone(),
                detail: format!("{} sheets", set.sheet_count),
                category: String::new(),
                size: String::new(),
            },
        }
    }
}

/// Execute the ls command
pub async fn execute_ls(
    browser: &mut ProjectBrowser,
    args: &LsArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    navigate(browser, args.path.as_deref()).await?;
    if let Some(raw) = &args.category {
        let category: FileCategory = raw.parse()?;
        browser.set_category(CategoryFilter::Category(category)).await?;
    }

    let items = browser.visible_items();
    let rows: Vec<ItemRow> = items.iter().map(ItemRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}

/// Execute the search command
pub async fn execute_search(
    browser: &mut ProjectBrowser,
    args: &SearchArgs,
    format: OutputFormat,
) -> Result<(), AppError> {
    navigate(browser, args.path.as_deref()).await?;
    browser.set_search(args.query.clone()).await?;

    let items = browser.visible_items();
    let rows: Vec<ItemRow> = items.iter().map(ItemRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}

async fn navigate(browser: &mut ProjectBrowser, path: Option<&str>) -> Result<(), AppError> {
    match path {
        Some(p) => browser.navigate_to_folder(p).await?,
        None => browser.navigate_to_root().await?,
    };
    Ok(())
}

//! CLI command definitions and dispatch.

pub mod list;
pub mod move_files;
pub mod sets;
pub mod tree;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use planroom_browser::{ProjectBrowser, UrlQuery};
use planroom_core::config::AppConfig;
use planroom_core::error::AppError;
use planroom_core::events::EventBus;
use planroom_store::{MemoryProjectStore, MemoryUiStateStore, ProjectManifest};

use crate::output::OutputFormat;

/// Planroom — construction project document browser
#[derive(Debug, Parser)]
#[command(name = "planroom", version, about, long_about = None)]
pub struct Cli {
    /// Path to the project manifest JSON file
    #[arg(short, long, default_value = "project.json")]
    pub manifest: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the folder tree
    Tree,
    /// List the items in a folder (root by default)
    Ls(list::LsArgs),
    /// Search files in the current scope
    Search(list::SearchArgs),
    /// List drawing sets, or the sheets of one set
    Sets(sets::SetsArgs),
    /// Move files into a folder (or to the root)
    Move(move_files::MoveArgs),
}

impl Cli {
    /// Load the manifest, build a browser over it, and dispatch.
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let manifest = ProjectManifest::from_path(&self.manifest)?;
        let store = Arc::new(MemoryProjectStore::new());
        let project_id = manifest.seed(&store);

        let events = Arc::new(EventBus::new(config.browser.event_buffer_size));
        let ui_state = Arc::new(MemoryUiStateStore::new());

        let mut browser = ProjectBrowser::new(project_id, store, ui_state, events, &config.browser);
        browser.init(&UrlQuery::root()).await?;

        match &self.command {
            Commands::Tree => tree::execute(&browser, self.format),
            Commands::Ls(args) => list::execute_ls(&mut browser, args, self.format).await,
            Commands::Search(args) => list::execute_search(&mut browser, args, self.format).await,
            Commands::Sets(args) => sets::execute(&mut browser, args, self.format).await,
            Commands::Move(args) => move_files::execute(&mut browser, args).await,
        }
    }
}

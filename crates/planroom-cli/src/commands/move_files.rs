//! Multi-file move command.
//!
//! Goes through the same selection/drag path the UI uses: the named
//! files are selected, one of them is "dragged", and the whole selection
//! lands on the target.

use clap::Args;

use planroom_browser::ProjectBrowser;
use planroom_core::error::AppError;
use planroom_core::types::FileId;

/// Arguments for the move command
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// File names to move
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Target folder path (omit to move to the root)
    #[arg(short, long)]
    pub to: Option<String>,
}

/// Execute the move command
pub async fn execute(browser: &mut ProjectBrowser, args: &MoveArgs) -> Result<(), AppError> {
    let mut ids: Vec<FileId> = Vec::new();
    for name in &args.names {
        let file = browser
            .files()
            .iter()
            .find(|f| f.name == *name)
            .ok_or_else(|| AppError::not_found(format!("No file named '{name}'")))?;
        ids.push(file.id);
    }

    for id in &ids {
        browser.toggle_selection(*id);
    }
    let payload = browser.begin_drag(ids[0]);
    let report = browser.drop_on(payload, args.to.as_deref()).await?;

    println!(
        "Moved {} file(s) to {}; {} failed.",
        report.moved.len(),
        args.to.as_deref().unwrap_or("(root)"),
        report.failed.len()
    );
    for (id, err) in &report.failed {
        eprintln!("  {}: {}", id, err);
    }
    Ok(())
}

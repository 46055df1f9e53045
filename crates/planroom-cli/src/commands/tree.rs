//! Folder tree printing.

use planroom_browser::ProjectBrowser;
use planroom_core::error::AppError;
use planroom_entity::FolderNode;

use crate::output::OutputFormat;

/// Execute the tree command
pub fn execute(browser: &ProjectBrowser, format: OutputFormat) -> Result<(), AppError> {
    let roots = browser.folder_tree();
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&roots)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if roots.is_empty() {
                println!("No folders.");
            } else {
                for node in &roots {
                    print_node(node, 0);
                }
            }
        }
    }
    Ok(())
}

fn print_node(node: &FolderNode, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{indent}{}/ ({} items)", node.name, node.item_count);
    for child in &node.children {
        print_node(child, depth + 1);
    }
}

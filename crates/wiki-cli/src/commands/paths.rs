//! Derived path display

use colored::Colorize;
use wiki_core::WikiContext;

use crate::error::Result;

/// Show the root page path and where test artifacts are written
pub fn run_paths(context: &WikiContext, json: bool) -> Result<()> {
    let root_page_path = context.root_page_path();
    let history = context.test_history_directory();
    let progress = context.test_progress_path();

    if json {
        let output = serde_json::json!({
            "root_page_path": root_page_path,
            "test_history_directory": history,
            "test_progress_path": progress,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Wiki Paths".bold());
    println!();
    println!("  {:<16} {}", "Root page:".dimmed(), root_page_path);
    println!("  {:<16} {}", "Test history:".dimmed(), history);
    println!("  {:<16} {}", "Test progress:".dimmed(), progress);

    Ok(())
}

//! Server identity and collaborator summary

use chrono::Local;
use colored::Colorize;
use wiki_core::{
    Authenticator, RecentChanges, TestSystemFactory, VersionsController, WikiContext,
};
use wiki_core::dates::{format_recent_changes_date, format_rfc_date};

use crate::error::Result;

/// Test systems a stock wiki page can ask for.
const KNOWN_TEST_SYSTEMS: [&str; 2] = ["slim", "fit"];

/// Show the version, a start timestamp and what the collaborators allow
pub fn run_info(context: &WikiContext, json: bool) -> Result<()> {
    let now = Local::now();
    let anonymous = context.authenticator().is_authenticated(None, None);
    let history_depth = context.versions_controller().history_depth();
    let recent_changes = context.recent_changes().max_entries();
    let test_systems: Vec<&str> = KNOWN_TEST_SYSTEMS
        .into_iter()
        .filter(|name| context.test_system_factory().supports(name))
        .collect();

    if json {
        let output = serde_json::json!({
            "version": context.version().as_str(),
            "started": format_rfc_date(&now),
            "anonymous_access": anonymous,
            "history_depth": history_depth,
            "recent_changes": recent_changes,
            "test_systems": test_systems,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let access = if anonymous {
        "open".green()
    } else {
        "restricted".yellow()
    };

    println!("{} {}", "Wiki".bold(), context.version());
    println!();
    println!("  {:<16} {}", "Started:".dimmed(), format_rfc_date(&now));
    println!("  {:<16} {}", "".dimmed(), format_recent_changes_date(&now).dimmed());
    println!("  {:<16} {}", "Access:".dimmed(), access);
    println!("  {:<16} {}", "Page history:".dimmed(), history_depth);
    println!("  {:<16} {}", "Recent changes:".dimmed(), recent_changes);
    if test_systems.is_empty() {
        println!("  {:<16} {}", "Test systems:".dimmed(), "(none)".dimmed());
    } else {
        println!("  {:<16} {}", "Test systems:".dimmed(), test_systems.join(", "));
    }

    Ok(())
}

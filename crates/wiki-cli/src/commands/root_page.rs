//! Root page loading

use colored::Colorize;
use wiki_core::{WikiContext, WikiPage};

use crate::error::Result;

/// Load the root page, with per-call variable overrides when given
pub fn run_root_page(
    context: &WikiContext,
    vars: &[(String, String)],
    lookup: Option<&str>,
    json: bool,
) -> Result<()> {
    let page = if vars.is_empty() {
        context.root_page()?
    } else {
        context.root_page_with(vars.iter().cloned())?
    };
    let resolved = lookup.map(|name| (name, page.variable(name)));

    if json {
        let mut output = serde_json::json!({
            "name": page.name(),
            "location": page.location(),
        });
        if let Some((name, value)) = &resolved {
            output["lookup"] = serde_json::json!({ "name": name, "value": value });
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Root Page".bold());
    println!();
    println!("  {:<10} {}", "Name:".dimmed(), page.name());
    println!("  {:<10} {}", "Location:".dimmed(), page.location());

    if let Some((name, value)) = resolved {
        match value {
            Some(value) => println!("  {} = {}", name.cyan(), value),
            None => println!("  {} {}", name.cyan(), "(unset)".dimmed()),
        }
    }

    Ok(())
}

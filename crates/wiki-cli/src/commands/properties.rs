//! Property lookup commands

use colored::Colorize;
use wiki_core::WikiContext;

use crate::error::{CliError, Result};

/// Print one property value, raw, for use in scripts
pub fn run_property(context: &WikiContext, name: &str) -> Result<()> {
    let value = context
        .property(name)
        .ok_or_else(|| CliError::PropertyNotFound {
            name: name.to_string(),
        })?;
    println!("{value}");
    Ok(())
}

/// List all properties in key order
pub fn run_properties(context: &WikiContext, json: bool) -> Result<()> {
    let properties = context.properties();

    if json {
        println!("{}", serde_json::to_string_pretty(properties)?);
        return Ok(());
    }

    if properties.is_empty() {
        println!("{}", "(no properties set)".dimmed());
        return Ok(());
    }

    for (key, value) in properties.iter() {
        println!("{} = {}", key.cyan(), value);
    }
    Ok(())
}

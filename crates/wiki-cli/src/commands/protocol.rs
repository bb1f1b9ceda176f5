//! Protocol and SSL settings display

use colored::Colorize;
use wiki_core::WikiContext;

use crate::error::Result;

/// Show the protocol flags derived from properties
pub fn run_protocol(context: &WikiContext, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "use_https": context.use_https(),
            "ssl_client_auth": context.ssl_client_auth(),
            "ssl_parameter_class": context.ssl_parameter_class_name(),
            "port": context.port(),
            "context_root": context.context_root(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let protocol = if context.use_https() {
        "https".green()
    } else {
        "http".normal()
    };
    let client_auth = if context.ssl_client_auth() {
        "required".yellow()
    } else {
        "optional".normal()
    };

    println!("{}", "Protocol".bold());
    println!();
    println!("  {:<14} {}", "Scheme:".dimmed(), protocol);
    println!("  {:<14} {}", "Port:".dimmed(), context.port());
    println!("  {:<14} {}", "Context root:".dimmed(), context.context_root());
    println!("  {:<14} {}", "Client auth:".dimmed(), client_auth);
    match context.ssl_parameter_class_name() {
        Some(class) => println!("  {:<14} {}", "SSL params:".dimmed(), class),
        None => println!("  {:<14} {}", "SSL params:".dimmed(), "(none)".dimmed()),
    }

    Ok(())
}

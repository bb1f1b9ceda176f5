//! Wiki runtime CLI
//!
//! Builds the runtime context a wiki server would start with and prints
//! what it derives: paths, protocol flags, properties and the root page.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::ContextLoader;
use error::{CliError, Result};
use wiki_core::RequestLogger;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("failed to initialise logging: {e}")))?;

    let Some(command) = cli.command.clone() else {
        // No command provided - show help hint
        println!("{} Wiki runtime CLI", "wiki".green().bold());
        println!();
        println!("Run {} for available commands.", "wiki --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let loader = match cli.config_dir.clone() {
        Some(dir) => ContextLoader::with_config_dir(&cwd, dir),
        None => ContextLoader::new(&cwd),
    };
    let context = loader.build(&cli)?;

    execute_command(&context, command)
}

fn execute_command(context: &wiki_core::WikiContext, cmd: Commands) -> Result<()> {
    context.logger().log(&format!("wiki {}", cmd.name()));

    match cmd {
        Commands::Info { json } => commands::run_info(context, json),
        Commands::Paths { json } => commands::run_paths(context, json),
        Commands::Protocol { json } => commands::run_protocol(context, json),
        Commands::Property { name } => commands::run_property(context, &name),
        Commands::Properties { json } => commands::run_properties(context, json),
        Commands::RootPage { vars, lookup, json } => {
            commands::run_root_page(context, &vars, lookup.as_deref(), json)
        }
    }
}

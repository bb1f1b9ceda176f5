//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Wiki runtime - Inspect the context a wiki server would start with
#[derive(Parser, Debug)]
#[command(name = "wiki")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory that contains the wiki root directory
    #[arg(long, global = true, env = "WIKI_ROOT_PATH", default_value = ".")]
    pub root_path: String,

    /// Name of the wiki root directory
    #[arg(long = "root-dir", global = true, env = "WIKI_ROOT_DIR", default_value = "FitNesseRoot")]
    pub root_directory_name: String,

    /// Port the server listens on
    #[arg(short, long, global = true, default_value_t = 80)]
    pub port: u16,

    /// URL prefix the wiki is served under
    #[arg(long, global = true, default_value = "/")]
    pub context_root: String,

    /// Properties file (.properties, .toml, .json, .yaml)
    ///
    /// When omitted, plugins.properties is read from the user config
    /// directory and then from the current directory, if present.
    #[arg(long, global = true)]
    pub properties: Option<PathBuf>,

    /// Define a property, overriding the properties file
    #[arg(short = 'D', long = "define", global = true, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub defines: Vec<(String, String)>,

    /// Directory searched for the user-level plugins.properties
    #[arg(long, global = true, env = "WIKI_CONFIG_DIR", hide = true)]
    pub config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the version, start time and collaborator capabilities
    Info {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the root page path and test artifact locations
    Paths {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the protocol and SSL settings derived from properties
    Protocol {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print a single property value
    ///
    /// Exits with an error when the property is not set.
    Property {
        /// Property name, e.g. wiki.protocol
        name: String,
    },

    /// List every property, sorted by key
    Properties {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Load the root page from disk
    ///
    /// Examples:
    ///   wiki root-page
    ///   wiki root-page --var user=bob --lookup user
    RootPage {
        /// Variable override for this load (repeatable)
        #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        vars: Vec<(String, String)>,

        /// Resolve a variable through the page's variable chain
        #[arg(long)]
        lookup: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Info { .. } => "info",
            Commands::Paths { .. } => "paths",
            Commands::Protocol { .. } => "protocol",
            Commands::Property { .. } => "property",
            Commands::Properties { .. } => "properties",
            Commands::RootPage { .. } => "root-page",
        }
    }
}

/// Parse `KEY=VALUE`; the value may be empty, the key may not.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

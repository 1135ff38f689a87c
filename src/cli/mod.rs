//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Resolve format identifiers to representative output
#[derive(Parser, Debug)]
#[command(name = "format-resolver")]
#[command(version)]
#[command(about = "Resolve format identifiers to representative output")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve one or more format identifiers
    Resolve(ResolveArgs),

    /// List registered formats
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Format identifiers to resolve
    #[arg(required = true)]
    pub identifiers: Vec<String>,

    /// Fail on unknown identifiers instead of printing an empty line
    #[arg(short, long)]
    pub strict: bool,

    /// Output format (table, json, json-pretty, yaml, csv)
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format (table, json, json-pretty, yaml, csv)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Show only built-in formats
    #[arg(short, long)]
    pub builtin: bool,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example configuration file
    Init {
        /// Destination path (.yaml, .yml or .json)
        #[arg(default_value = "./format-resolver.yaml")]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Output as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file (defaults to the discovered one)
        file: Option<String>,
    },

    /// Show supported environment variables
    Env,
}

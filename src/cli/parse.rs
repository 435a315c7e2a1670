//! CLI parse: clap types for Concierge. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Concierge CLI - plan a celebration: a show, a hotel, a cuisine and a restaurant
#[derive(Parser)]
#[command(name = "concierge")]
#[command(about = "Guided celebration planner over a cached, generated catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep the catalog in memory only for this run
    #[arg(long)]
    pub no_cache: bool,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the interactive planner
    Plan,
    /// Resolve and print the catalog
    Catalog {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Clear the cached catalog first
        #[arg(long)]
        refresh: bool,
    },
    /// Make a complete selection non-interactively and print the summary
    Select {
        /// Event id
        #[arg(long)]
        event: String,
        /// Lodging id (must belong to the event)
        #[arg(long)]
        lodging: String,
        /// Cuisine label
        #[arg(long)]
        cuisine: String,
        /// Dining id (must belong to the lodging and match the cuisine)
        #[arg(long)]
        dining: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Inspect or clear the catalog cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
    /// Write a default workspace configuration
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Show whether a cached catalog exists and whether it is still fresh
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Remove the cached catalog
    Clear,
}

//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Finder - search the company directory by city
#[derive(Parser, Debug)]
#[command(name = "finder", author, version)]
#[command(about = "Search the company directory by city", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory search endpoint (overrides the config file)
    #[arg(long, env = "FINDER_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one search and print the resulting page
    Search {
        /// City to search in
        city: String,

        /// Page to show
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Print the search state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start the interactive prompt (the default)
    Interactive,
    /// Configuration management
    Config {
        /// Config operation to run
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `finder config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Create a default config file
    Init {
        /// Where to write (defaults to the platform config dir)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

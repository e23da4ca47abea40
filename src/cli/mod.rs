pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kindling")]
#[command(about = "A terminal Hacker News search client", long_about = None)]
pub struct Cli {
    /// Settings database path (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub db: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search stories and print the results
    Search {
        /// Search term (defaults to the persisted term)
        query: Option<String>,
    },
    /// Show or set the persisted search term
    Term {
        /// New term to persist
        value: Option<String>,
    },
    /// Launch the TUI
    Tui,
}

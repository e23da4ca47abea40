use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kindling::app::AppContext;
use kindling::cli::{commands, Cli, Commands};
use kindling::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(cli.db, config)?;

    match cli.command {
        Commands::Search { query } => {
            commands::search_stories(&ctx, query).await?;
        }
        Commands::Term { value } => {
            commands::show_or_set_term(&ctx, value)?;
        }
        Commands::Tui => {
            kindling::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}

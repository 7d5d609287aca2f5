//! This is a command-line tool to fill a campground database with sample data
//! via [libcamp]
use crate::{cli::*, config::Config};
use anyhow::{Context, Result};
use clap::Parser;
use libcamp::Database;
use tracing::{debug, info};
use tracing_subscriber::filter::EnvFilter;

mod cli;
mod commands;
mod config;
mod output;
mod prompt;

async fn open_database(url: &str) -> Result<Database> {
    let db = Database::open(url)
        .await
        .with_context(|| format!("connection error: unable to open database '{url}'"))?;
    info!(backend = %db.backend(), database = %db.name(), "Database connected");
    println!("Database connected");
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("CAMPSEED_LOG"))
        .init();
    let args = Cli::parse();
    let config_file = config::config_file()?;
    // reset must work even if the existing file fails to load
    if matches!(
        args.command,
        Commands::Config {
            command: ConfigCommands::Reset
        }
    ) {
        return commands::config::reset(&config_file).await;
    }
    let cfg = Config::load_or_default(&config_file)
        .await
        .with_context(|| format!("Failed to load config file {}", config_file.display()))?;
    debug!(?cfg, "loaded configuration");
    let default_author = cfg.author.clone();

    match args.command {
        Commands::Config { command } => {
            return commands::config::handle_command(command, cfg, &config_file).await;
        }
        Commands::Preview {
            profile,
            full,
            output,
        } => {
            return commands::campgrounds::preview(
                profile,
                default_author.as_deref(),
                full,
                output,
            );
        }
        _ => (),
    };

    let url = cfg.database_url(args.database);
    debug!(%url, "using database");
    let db = open_database(&url).await?;

    let res = match args.command {
        // already handled above
        Commands::Config { .. } | Commands::Preview { .. } => Ok(()),
        Commands::Seed { profile, yes } => {
            commands::campgrounds::seed(&db, profile, default_author.as_deref(), yes).await
        }
        Commands::Count => commands::campgrounds::count(&db).await,
        Commands::List { full, output } => commands::campgrounds::list(&db, full, output).await,
        Commands::Clear { yes } => commands::campgrounds::clear(&db, yes).await,
    };
    db.close().await;
    res
}

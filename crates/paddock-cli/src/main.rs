//! Paddock CLI
//!
//! Command-line interface for the racing and sports services

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use paddock_api::AppConfig;
use paddock_core::logging_facility;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "paddock")]
#[command(about = "Paddock - Racing and sports listings", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./paddock.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database path, overriding `database.path`
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create the schema and seed the database
    Seed,
    /// Race operations
    Races(commands::races::RacesArgs),
    /// Sports match operations
    Matches(commands::matches::MatchesArgs),
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_from(cli.config.as_deref())?;
    if let Some(db) = &cli.db {
        config.database.path = db.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let result = match load_config(&cli) {
        Ok(config) => {
            logging_facility::init(config.logging.profile);
            match cli.command {
                Commands::Serve(args) => commands::serve::execute(args, config).await,
                Commands::Seed => commands::seed::execute(config),
                Commands::Races(args) => commands::races::execute(args, config),
                Commands::Matches(args) => commands::matches::execute(args, config),
            }
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

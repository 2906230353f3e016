mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sample_crud_core::DatabaseConfig;
use sample_crud_storage::MySqlStorage;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sample-crud")]
#[command(about = "Paginated posts API backed by MySQL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Listen port [env: PORT, default 8080]
        #[arg(short, long)]
        port: Option<u16>,
        /// Listen address
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Create the posts table if it does not exist
    Migrate,
    /// Print one page of posts as JSON
    List {
        /// Page number (values below 1 or non-numeric fall back to 1)
        #[arg(long)]
        page: Option<String>,
        /// Page size (values below 1 or non-numeric fall back to 12)
        #[arg(short, long)]
        limit: Option<String>,
    },
}

/// Connects using `DATABASE_*` variables. Failure here is fatal for every command.
pub(crate) async fn connect_storage() -> Result<MySqlStorage> {
    let config = DatabaseConfig::from_env();
    MySqlStorage::connect(&config)
        .await
        .with_context(|| format!("failed to connect database {}", config.redacted_url()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Migrate => commands::migrate::run().await?,
        Commands::List { page, limit } => commands::list::run(page, limit).await?,
    }

    Ok(())
}

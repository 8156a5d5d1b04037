//! campusnet CLI - query and update a campus social network database.
//!
//! Opens the SQLite database (see [`config`] for where it lives), runs one
//! subcommand and prints its result as JSON on stdout. Logs go to stderr and
//! honour `RUST_LOG`.

use std::path::PathBuf;

use anyhow::Context;
use campus_store::sqlite::{Campus, Database};
use clap::Parser;

mod commands;
mod config;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "campusnet", about = "Campus social network data tool")]
struct Cli {
    /// Database file. Overrides `CAMPUSNET_DB_PATH`.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with span durations, keeping stdout for JSON
    use tracing_subscriber::fmt::format::FmtSpan;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let db_path = cli.db.unwrap_or_else(config::get_db_path);
    let policy = config::get_separation_policy()?;
    let max_connections = config::get_max_connections();
    tracing::debug!(path = %db_path.display(), %policy, max_connections, "Resolved configuration");

    let db = Database::open(&db_path, max_connections)
        .await
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    let campus = Campus::new(&db, policy);

    if cli.command.is_mutation() {
        tracing::info!(command = ?cli.command, "Applying change");
    }
    let output = commands::execute(&campus, cli.command)
        .await
        .context("query failed")?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

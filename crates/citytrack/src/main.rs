//! CityTrack - civic issue simulator backend
//!
//! Single-session game server: one in-memory session, a fixed catalog of
//! civic issues or narrative scenes, and a JSON REST API for the browser
//! frontends.

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use citytrack_engine::{GameEngine, GameVariant};
use citytrack_server::{AppState, ServerConfig};
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            host,
            port,
            variant,
            config,
        } => run_server(host, port, variant, config).await,
        Command::Catalog { variant } => print_catalog(&variant),
    }
}

/// Run the HTTP game server
async fn run_server(
    host: Option<String>,
    port: Option<u16>,
    variant: Option<String>,
    config: Option<PathBuf>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let file_config = match config {
        Some(path) => ServerConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    // CLI flags win over the config file.
    let variant = match variant {
        Some(name) => parse_variant(&name)?,
        None => *file_config.variant(),
    };
    let config = ServerConfig::new(
        host.unwrap_or_else(|| file_config.host().clone()),
        port.unwrap_or(*file_config.port()),
        variant,
    );

    let addr = config.socket_addr()?;

    info!(variant = %config.variant(), "Starting CityTrack backend");
    let state = AppState::new(*config.variant());

    info!("Server ready at http://{addr}/");
    info!("API available at http://{addr}/api/");
    citytrack_server::serve(addr, state).await?;

    Ok(())
}

/// Print the selected catalog as pretty JSON
fn print_catalog(variant: &str) -> Result<()> {
    let engine = GameEngine::new(parse_variant(variant)?);
    println!("{}", serde_json::to_string_pretty(engine.catalog().entries())?);
    Ok(())
}

fn parse_variant(name: &str) -> Result<GameVariant> {
    name.parse()
        .map_err(|_| anyhow::anyhow!("unknown game variant '{name}' (expected issue-map or narrative)"))
}

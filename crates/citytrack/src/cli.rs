//! Command-line interface for citytrack.

use clap::{Parser, Subcommand};

/// CityTrack - civic issue simulator backend
#[derive(Parser, Debug)]
#[command(name = "citytrack")]
#[command(about = "Backend for the CityTrack civic sense simulator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Host to bind to (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Game variant: issue-map or narrative (overrides config file)
        #[arg(long)]
        variant: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print the selected catalog as JSON
    Catalog {
        /// Game variant: issue-map or narrative
        #[arg(long, default_value = "issue-map")]
        variant: String,
    },
}

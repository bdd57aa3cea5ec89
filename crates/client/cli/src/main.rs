//! Command line client for the community event registry.
//!
//! Run with: `community-events <command>`

mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{
    Accessibility, Admin, Browse, Featured, List, Register, Show, Subscribe, Volunteer,
};
use runtime::{Registry, RegistryConfig};

/// Community event registry
#[derive(Parser)]
#[command(name = "community-events")]
#[command(about = "Browse and register for community events", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory (overrides REGISTRY_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List events, optionally filtered
    List(List),

    /// Show the soonest upcoming events
    Featured(Featured),

    /// Show one event in full
    Show(Show),

    /// Register for an event
    Register(Register),

    /// Subscribe to the newsletter
    Subscribe(Subscribe),

    /// Sign up as a volunteer
    Volunteer(Volunteer),

    /// Text size and contrast preferences
    #[command(subcommand)]
    #[command(name = "a11y")]
    Accessibility(Accessibility),

    /// Interactive search with live results
    Browse(Browse),

    /// Admin dashboard (requires credentials)
    Admin(Admin),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let _guard = logging::init(&runtime::config::log_dir())?;

    let mut config = RegistryConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let registry = Registry::builder()
        .config(config)
        .build()
        .context("Failed to open registry")?;

    match cli.command {
        Command::List(cmd) => cmd.execute(&registry),
        Command::Featured(cmd) => cmd.execute(&registry),
        Command::Show(cmd) => cmd.execute(&registry),
        Command::Register(cmd) => cmd.execute(&registry),
        Command::Subscribe(cmd) => cmd.execute(&registry),
        Command::Volunteer(cmd) => cmd.execute(&registry),
        Command::Accessibility(cmd) => cmd.execute(&registry),
        Command::Browse(cmd) => cmd.execute(&registry).await,
        Command::Admin(cmd) => cmd.execute(&registry),
    }
}

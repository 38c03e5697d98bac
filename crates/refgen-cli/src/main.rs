//! refgen CLI - generate API reference pages from library metadata.
//!
//! This is the main entry point for the refgen command-line interface.
//! Command implementations live in separate modules under `commands`.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    match cli.command {
        Commands::Build { config } => commands::build::execute(&config),
        Commands::Check { config } => commands::check::execute(&config),
    }
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.debug {
        Level::TRACE
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

//! CLI structure and argument parsing.
//!
//! refgen follows a plain command-subcommand pattern:
//!
//! ```bash
//! # Generate the documentation tree described by refgen.toml
//! refgen build
//!
//! # Use an explicit configuration file
//! refgen build --config docs/refgen.toml
//!
//! # Validate configuration, metadata, and templates without writing
//! refgen check
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for the `refgen` command.
#[derive(Parser, Debug)]
#[command(name = "refgen")]
#[command(version)]
#[command(about = "refgen - generate API reference pages from library metadata", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug-level) logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Enable trace-level logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the documentation tree
    Build {
        /// Path to the configuration file
        #[arg(short, long, default_value = "refgen.toml")]
        config: PathBuf,
    },
    /// Validate configuration and templates without writing output
    Check {
        /// Path to the configuration file
        #[arg(short, long, default_value = "refgen.toml")]
        config: PathBuf,
    },
}

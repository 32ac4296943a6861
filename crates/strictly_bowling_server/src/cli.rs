//! Command-line interface for strictly_bowling.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Bowling - ten-pin bowling score keeper
#[derive(Parser, Debug)]
#[command(name = "strictly_bowling")]
#[command(about = "Ten-pin bowling scoring server", long_about = None)]
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
        /// Path to server config file
        #[arg(short, long, default_value = "strictly_bowling.toml")]
        config: PathBuf,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Score a sequence of rolls and print the frames
    Score {
        /// Pins knocked down by each roll, in order
        #[arg(required = true, allow_negative_numbers = true)]
        pins: Vec<i64>,
    },
}

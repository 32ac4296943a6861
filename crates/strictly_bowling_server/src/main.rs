//! Strictly Bowling - unified CLI
//!
//! Runs the scoring server or scores a roll sequence offline.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_bowling::{Game, pin_count};
use strictly_bowling_server::{ServerConfig, SessionManager, router, scorecard};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => run_server(config, host, port).await,
        Command::Score { pins } => {
            init_tracing("warn");
            score(&pins)
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

/// Run the HTTP game server
async fn run_server(config_path: PathBuf, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = ServerConfig::load_or_default(&config_path)?.with_overrides(host, port);
    init_tracing(config.log_filter());

    info!(config = ?config, "Starting Strictly Bowling server");

    let app = router(SessionManager::new());
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Server ready at http://{}/", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Score a roll sequence and print the scorecard
#[instrument]
fn score(pins: &[i64]) -> Result<()> {
    let mut game = Game::new();
    for (index, &raw) in pins.iter().enumerate() {
        pin_count(raw)
            .and_then(|pins| game.roll(pins))
            .with_context(|| format!("Roll {} ({} pins) rejected", index + 1, raw))?;
    }

    print!("{}", scorecard::render(&game));
    Ok(())
}

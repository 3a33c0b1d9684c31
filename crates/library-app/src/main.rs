//! # Local Library - Authors service
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Creates: InMemoryAuthorRepository (adapter)             │
//! │    ├── Creates: ListAuthors (use case)                         │
//! │    ├── Creates: axum Router (controller)                       │
//! │    └── Runs: The HTTP server                                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   library                          - Serve on 127.0.0.1:8000
//!   library --config library.yaml    - Load settings from YAML
//!   library --seed data/authors.json - Pre-load authors

mod config;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use library_adapter::controller::{self, TracingLogger};
use library_adapter::repository::{seed_repository, InMemoryAuthorRepository};
use library_usecase::ListAuthors;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "library")]
#[command(about = "Local Library - author catalogue service")]
#[command(version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:8000
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// JSON file of author documents to load at start-up
    #[arg(short, long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(cli.bind, cli.seed);

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    let repository = InMemoryAuthorRepository::new();

    if let Some(path) = &config.seed_path {
        let count = seed_repository(&repository, path)
            .with_context(|| format!("could not seed authors from {}", path.display()))?;
        info!(count, path = %path.display(), "loaded authors");
    }

    let app = controller::router(ListAuthors::new(repository), Arc::new(TracingLogger));

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("could not bind {}", config.bind_address))?;

    info!("library service is up and running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running service")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "library",
            "--config",
            "library.yaml",
            "--bind",
            "0.0.0.0:9000",
            "--seed",
            "data/authors.json",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("library.yaml")));
        assert_eq!(cli.bind.map(|a| a.port()), Some(9000));
        assert_eq!(cli.seed, Some(PathBuf::from("data/authors.json")));
    }

    #[test]
    fn test_cli_rejects_bad_address() {
        assert!(Cli::try_parse_from(["library", "--bind", "nowhere"]).is_err());
    }
}

//! Gotham server CLI
//!
//! Starts the HTTP server for the gate, the pages and the wisdom function.

use anyhow::Context;
use clap::Parser;
use gotham_server::{config::GothamConfig, start_server};
use std::path::PathBuf;

/// Batman-themed content service
#[derive(Debug, Parser)]
#[command(name = "gotham", version, about)]
struct Args {
    /// TOML configuration file; without one, settings come from the environment
    #[arg(short, long, env = "GOTHAM_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GothamConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => GothamConfig::from_env().context(
            "no config file given; set GOTHAM_ACCESS_KEY and GOTHAM_SESSION_SECRET or pass --config",
        )?,
    };

    start_server(config).await.context("server error")?;
    Ok(())
}

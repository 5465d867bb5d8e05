//! HireHub terminal client binary.

mod cli;
mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hirehub_client::{ApiClient, ClientConfig, SessionStore};

use crate::cli::Args;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::from_default_env().add_directive("hirehub=info".parse().unwrap());
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_file(false).with_line_number(false))
        .with(env_filter)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("command failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let session = SessionStore::load(session_path()?)?;
    let client = ApiClient::new(ClientConfig::from_env(), Arc::new(session))?;
    commands::run(&client, args.command).await
}

/// Session file under the user config directory, so a login survives
/// between invocations.
fn session_path() -> anyhow::Result<PathBuf> {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hirehub");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("session.json"))
}

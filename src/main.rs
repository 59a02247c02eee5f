//! academy-server: HTTP backend for the academy website.
//!
//! Usage:
//!   academy-server [--config path.toml] [--port 5000] [--static-dir dist/public] [--no-seed]
//!
//! Environment variables:
//!   ACADEMY_CONFIG, ACADEMY_HOST, ACADEMY_PORT, ACADEMY_STATIC_DIR,
//!   ACADEMY_NO_SEED, ACADEMY_LOG - same as the flags
//!   RUST_LOG - tracing filter, takes precedence over --log-level

use academy::{api, Args};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = args.resolve_config()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        bind = %config.bind_addr(),
        seed = config.seed,
        static_dir = ?config.static_dir,
        "academy-server starting"
    );

    api::run(config).await.context("server error")
}

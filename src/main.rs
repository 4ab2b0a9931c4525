//! schedule-engine - HTTP service for schedule reports
//!
//! Loads the YAML configuration, builds the shared state and serves the
//! report and settings endpoints.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use schedule_engine::api::{AppState, create_router};
use schedule_engine::config::ConfigLoader;

/// Turns hand-typed weekly shift schedules into report tables
#[derive(Parser, Debug)]
#[command(name = "schedule-engine")]
#[command(about = "Turns hand-typed weekly shift schedules into report tables", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "./config/schedule.yaml")]
    config: PathBuf,

    /// Listen address override (or set SCHEDULE_ENGINE_LISTEN env var)
    #[arg(short, long, env = "SCHEDULE_ENGINE_LISTEN")]
    listen: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "schedule-engine starting"
    );

    let loader = ConfigLoader::load(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))?;
    let config = loader.into_config();

    let listen = args
        .listen
        .clone()
        .unwrap_or_else(|| config.server.listen.clone());

    info!(
        config_path = %args.config.display(),
        primary_policy = %config.durations.primary,
        week_count = config.defaults.week_count,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .with_context(|| format!("Failed to bind {}", listen))?;

    info!(listen = %listen, "Listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("schedule-engine stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}

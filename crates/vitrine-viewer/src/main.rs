//! Vitrine - Main entry point
//!
//! Desktop viewer for GLB models: orbit camera, ground grid, lighting,
//! and a floating panel controlling the "Coat" sub-part's visibility and
//! emissive tint.

mod app;
mod config;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "GLB model viewer with coat visibility and tint controls")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "vitrine.toml")]
    config: PathBuf,

    /// Path to the GLB model, overriding the configuration
    #[arg(short, long)]
    model: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Vitrine v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = config::load_config(&args.config)?;

    // Override model path if specified
    if let Some(model) = args.model {
        config.model.path = model;
    }

    let params = config.view_params()?;

    info!(model = %config.model.path, "Starting viewer");

    app::run(&config, params);

    Ok(())
}

use clap::Parser;
use common::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::model::GenericError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "gamelib/config/dev.yaml")]
    pub config: PathBuf,

    /// Write a profile holding the Steam review-label preset to this path and exit
    #[arg(long)]
    pub write_steam_preset: Option<PathBuf>,

    /// Print the run counters in Prometheus text format when done
    #[arg(long)]
    pub metrics: bool,
}

pub fn initialize_executable() -> Result<(Args, Config), GenericError> {
    let args = Args::parse();
    let config = Config::load(&args.config)?;

    init_tracing(&config.common.log_level);
    tracing::info!(
        config = %args.config.display(),
        project = %config.common.project_name,
        "Loaded config"
    );

    Ok((args, config))
}

/// Installs the global fmt subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    // A subscriber may already be installed, e.g. by a test harness.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

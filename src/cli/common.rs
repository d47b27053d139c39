//! Settings and logging setup shared by all subcommands

use crate::{Settings, config::SettingsLoader};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Options accepted by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Settings file path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the messenger web client (overrides settings)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

/// Load settings with precedence: flags > environment > file > defaults
pub fn load_settings(args: &CommonArgs) -> Result<Settings> {
    let config_path = args
        .config
        .clone()
        .or_else(SettingsLoader::get_config_path);

    let mut settings = SettingsLoader::new()
        .load_layers(config_path.as_deref())
        .context("Failed to load settings")?;

    if let Some(base_url) = &args.base_url {
        settings.remote.base_url = base_url.clone();
    }
    settings.logging.verbose = args.verbose;

    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

/// Build the log filter with precedence: --verbose > RUST_LOG > settings level
pub fn log_filter(settings: &Settings) -> EnvFilter {
    if settings.logging.verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&settings.logging.level)
    }
}

/// Initialize logging to stderr; stdout is reserved for command output
pub fn init_logging(settings: &Settings) {
    let _ = tracing_subscriber::registry()
        .with(log_filter(settings))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

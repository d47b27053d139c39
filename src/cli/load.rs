//! `load`: fetch the endpoint configuration and print it

use super::common::{CommonArgs, init_logging, load_settings};
use crate::{
    client::{ConfigLoader, HttpTransport},
    error::format_error,
    types::Configuration,
    utils::version,
};
use anyhow::Result;

/// Arguments for the load command
#[derive(Debug, Default)]
pub struct LoadArgs {
    pub common: CommonArgs,
    pub json: bool,
}

/// Run the load command
pub async fn run_load(args: LoadArgs) -> Result<()> {
    let settings = load_settings(&args.common)?;
    init_logging(&settings);

    tracing::debug!("messenger-endpoints v{}", version::get_version());

    let loader = ConfigLoader::from_settings(HttpTransport::new(&settings)?, &settings);

    match loader.load_config().await {
        Ok(config) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", render_plain(&config));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to load endpoint configuration: {}", format_error(&e));
            std::process::exit(1);
        }
    }
}

/// One `label: value` line per endpoint
pub fn render_plain(config: &Configuration) -> String {
    config
        .entries()
        .map(|(field, value)| format!("{}: {}\n", field.label(), value))
        .collect()
}

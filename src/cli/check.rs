//! `check`: validate a local copy of the configuration file

use super::{
    common::{CommonArgs, init_logging},
    load::render_plain,
};
use crate::{Settings, codec, error::format_error};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug)]
pub struct CheckArgs {
    pub common: CommonArgs,
    pub file: PathBuf,
}

/// Run the check command
pub fn run_check(args: CheckArgs) -> Result<()> {
    let mut settings = Settings::default();
    settings.logging.verbose = args.common.verbose;
    init_logging(&settings);

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    match codec::decode(&content) {
        Ok(config) => {
            print!("{}", render_plain(&config));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: {}", args.file.display(), format_error(&e));
            std::process::exit(1);
        }
    }
}

//! `save`: submit new endpoint values to the write script

use super::common::{CommonArgs, init_logging, load_settings};
use crate::client::{ConfigSaver, EndpointForm, HttpTransport, Notifier, submit_form};
use anyhow::Result;

/// Arguments for the save command
#[derive(Debug, Default)]
pub struct SaveArgs {
    pub common: CommonArgs,
    pub ip_login: String,
    pub ip_chat: String,
    pub ip_register: String,
}

/// Prints notifications on the terminal
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

/// Run the save command
pub async fn run_save(args: SaveArgs) -> Result<()> {
    let settings = load_settings(&args.common)?;
    init_logging(&settings);

    let saver = ConfigSaver::from_settings(HttpTransport::new(&settings)?, &settings);
    let form = build_form(&args);

    if submit_form(&saver, &form, &ConsoleNotifier).await.is_err() {
        std::process::exit(1);
    }

    Ok(())
}

/// Fill the form from the command-line values
fn build_form(args: &SaveArgs) -> EndpointForm {
    EndpointForm::new(
        args.ip_login.as_str(),
        args.ip_chat.as_str(),
        args.ip_register.as_str(),
    )
}

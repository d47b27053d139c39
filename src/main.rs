//! Command-line client for the messenger endpoint configuration
//!
//! # Usage
//!
//! ## Load
//! ```bash
//! messenger-endpoints --base-url http://chat.example.org/secure_messenger/ load
//! messenger-endpoints load --json
//! ```
//!
//! ## Save
//! ```bash
//! messenger-endpoints save --ip-login 10.0.0.1:5001 --ip-chat 10.0.0.1:5000 --ip-register 10.0.0.1:5002
//! ```
//!
//! ## Check a local file
//! ```bash
//! messenger-endpoints check ./config.txt
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use messenger_endpoints::cli::{
    CommonArgs,
    check::{CheckArgs, run_check},
    load::{LoadArgs, run_load},
    save::{SaveArgs, run_save},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "messenger-endpoints")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the endpoint configuration from the web server and print it
    Load {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save new endpoint values through the write script
    Save {
        /// Login server address
        #[arg(long, value_name = "ADDRESS", allow_hyphen_values = true)]
        ip_login: String,

        /// Chat server address
        #[arg(long, value_name = "ADDRESS", allow_hyphen_values = true)]
        ip_chat: String,

        /// Registration server address
        #[arg(long, value_name = "ADDRESS", allow_hyphen_values = true)]
        ip_register: String,
    },

    /// Validate a local configuration file
    Check {
        /// File in the `ipLogin:...;` format
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Load { json } => {
            run_load(LoadArgs {
                common: cli.common,
                json,
            })
            .await
        }
        Commands::Save {
            ip_login,
            ip_chat,
            ip_register,
        } => {
            run_save(SaveArgs {
                common: cli.common,
                ip_login,
                ip_chat,
                ip_register,
            })
            .await
        }
        Commands::Check { file } => run_check(CheckArgs {
            common: cli.common,
            file,
        }),
    }
}

//! Messenger Endpoints
//!
//! Client for the endpoint configuration of the secure messenger web client.
//! The web server keeps the addresses of the login, chat and registration
//! servers in a small text file; this crate reads that file into a typed
//! [`Configuration`] and writes edited values back through the server-side
//! write script.
//!
//! # Architecture
//!
//! - [`codec`]: the `ipLogin:...;` text format
//! - [`client`]: loader, saver and form submission over a [`client::Transport`]
//! - [`config`]: the client's own settings (TOML file + environment)
//! - [`cli`]: the `messenger-endpoints` command
//!
//! # Examples
//!
//! ```rust
//! use messenger_endpoints::{Configuration, codec};
//!
//! let config = codec::decode("ipLogin:1.2.3.4:8080;\nipChat:1.2.3.4:8081;\nipRegister:1.2.3.4:8082;")?;
//! assert_eq!(config, Configuration::new("1.2.3.4:8080", "1.2.3.4:8081", "1.2.3.4:8082"));
//! assert_eq!(codec::encode(&config)?.lines().count(), 3);
//! # Ok::<(), messenger_endpoints::Error>(())
//! ```

pub mod cli;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use client::{ConfigLoader, ConfigSaver};
pub use config::{Settings, SettingsLoader};
pub use error::{Error, Result};
pub use types::{Configuration, EndpointField};

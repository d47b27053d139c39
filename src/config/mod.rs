//! Settings management for the endpoint client
//!
//! This module handles loading the client's own settings: where the web server
//! lives, how the HTTP client behaves and how much to log.

pub mod loader;
pub mod settings;

pub use loader::SettingsLoader;
pub use settings::Settings;

/// Serializes tests that modify process environment variables
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

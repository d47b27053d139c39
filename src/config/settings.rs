//! Settings for the endpoint client
//!
//! Loaded from a TOML file, then overridden by environment variables and
//! finally by command-line flags.

use crate::client::{
    loader::DEFAULT_READ_PATH,
    saver::{DEFAULT_TARGET_FILE, DEFAULT_WRITE_PATH},
};
use serde::{Deserialize, Serialize};

// Helper functions for serde defaults
fn default_base_url() -> String {
    "http://localhost/secure_messenger/".to_string()
}

fn default_read_path() -> String {
    DEFAULT_READ_PATH.to_string()
}

fn default_write_path() -> String {
    DEFAULT_WRITE_PATH.to_string()
}

fn default_target_file() -> String {
    DEFAULT_TARGET_FILE.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    crate::utils::version::user_agent()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Where the configuration file and write script live
    #[serde(default)]
    pub remote: RemoteSettings,
    /// HTTP client configuration
    #[serde(default)]
    pub network: NetworkSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Location of the configuration resources on the web server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    /// Base URL of the messenger web client
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the configuration file, relative to the base URL
    #[serde(default = "default_read_path")]
    pub read_path: String,
    /// Path of the write script, relative to the base URL
    #[serde(default = "default_write_path")]
    pub write_path: String,
    /// File name passed to the write script
    #[serde(default = "default_target_file")]
    pub target_file: String,
}

/// Network and proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// HTTPS proxy URL
    #[serde(default)]
    pub https_proxy: Option<String>,
    /// HTTP proxy URL
    #[serde(default)]
    pub http_proxy: Option<String>,
    /// All protocols proxy URL
    #[serde(default)]
    pub all_proxy: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            read_path: default_read_path(),
            write_path: default_write_path(),
            target_file: default_target_file(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
            https_proxy: None,
            http_proxy: None,
            all_proxy: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables on top of the defaults
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;

        Ok(settings)
    }

    /// Apply environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(base_url) = std::env::var("MESSENGER_BASE_URL") {
            self.remote.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("MESSENGER_TIMEOUT") {
            self.network.request_timeout = timeout.parse().map_err(|e| {
                crate::Error::config("MESSENGER_TIMEOUT", format!("Invalid timeout: {}", e))
            })?;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.logging.level = level;
        }

        // Proxy settings always override when present
        if let Ok(proxy) = std::env::var("HTTPS_PROXY") {
            self.network.https_proxy = Some(proxy);
        }
        if let Ok(proxy) = std::env::var("HTTP_PROXY") {
            self.network.http_proxy = Some(proxy);
        }
        if let Ok(proxy) = std::env::var("ALL_PROXY") {
            self.network.all_proxy = Some(proxy);
        }

        Ok(self)
    }

    /// Get effective proxy URL, preferring HTTPS over HTTP over ALL
    pub fn get_proxy_url(&self) -> Option<String> {
        self.network
            .https_proxy
            .as_ref()
            .or(self.network.http_proxy.as_ref())
            .or(self.network.all_proxy.as_ref())
            .cloned()
    }

    /// Validate settings
    pub fn validate(&self) -> crate::Result<()> {
        if let Err(e) = url::Url::parse(&self.remote.base_url) {
            return Err(crate::Error::config(
                "base_url",
                format!("Invalid base URL '{}': {}", self.remote.base_url, e),
            ));
        }

        for (name, value) in [
            ("read_path", &self.remote.read_path),
            ("write_path", &self.remote.write_path),
            ("target_file", &self.remote.target_file),
        ] {
            if value.trim().is_empty() {
                return Err(crate::Error::config(name, "cannot be empty"));
            }
        }

        if self.network.request_timeout == 0 {
            return Err(crate::Error::config(
                "request_timeout",
                "Invalid request timeout: cannot be 0",
            ));
        }

        if self.network.connect_timeout == 0 {
            return Err(crate::Error::config(
                "connect_timeout",
                "Invalid connect timeout: cannot be 0",
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_level",
                    format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        for (name, proxy_url) in [
            ("https_proxy", &self.network.https_proxy),
            ("http_proxy", &self.network.http_proxy),
            ("all_proxy", &self.network.all_proxy),
        ] {
            if let Some(url_str) = proxy_url
                && let Err(e) = url::Url::parse(url_str)
            {
                return Err(crate::Error::config(
                    name,
                    format!("Invalid proxy URL '{}': {}", url_str, e),
                ));
            }
        }

        Ok(())
    }
}

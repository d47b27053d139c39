//! Loading the endpoint configuration from the web server

use super::transport::Transport;
use crate::{Result, codec, config::Settings, types::Configuration};
use tracing::{debug, error, info};

/// Default location of the configuration file, relative to the base URL
pub const DEFAULT_READ_PATH: &str = "js/config.txt";

/// Fetches and decodes the endpoint configuration.
///
/// # Examples
///
/// ```no_run
/// use messenger_endpoints::client::{ConfigLoader, HttpTransport};
/// use messenger_endpoints::Settings;
///
/// # tokio_test::block_on(async {
/// let settings = Settings::default();
/// let loader = ConfigLoader::new(HttpTransport::new(&settings)?);
/// let config = loader.load_config().await?;
/// println!("chat server at {}", config.chat);
/// # Ok::<(), messenger_endpoints::Error>(())
/// # });
/// ```
#[derive(Debug)]
pub struct ConfigLoader<T> {
    transport: T,
    read_path: String,
}

impl<T: Transport> ConfigLoader<T> {
    /// Create a loader reading from the default path
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            read_path: DEFAULT_READ_PATH.to_string(),
        }
    }

    /// Create a loader reading from the path named in the settings
    pub fn from_settings(transport: T, settings: &Settings) -> Self {
        Self::new(transport).with_read_path(settings.remote.read_path.clone())
    }

    /// Override the resource path
    pub fn with_read_path(mut self, read_path: impl Into<String>) -> Self {
        self.read_path = read_path.into();
        self
    }

    /// Path of the resource being read
    pub fn read_path(&self) -> &str {
        &self.read_path
    }

    /// Fetch the configuration file and decode it
    pub async fn load_config(&self) -> Result<Configuration> {
        debug!("Loading endpoint configuration from {}", self.read_path);

        let body = self.transport.fetch_text(&self.read_path).await?;
        let config = codec::decode(&body).map_err(|e| {
            error!("Endpoint configuration at {} is invalid: {}", self.read_path, e);
            e
        })?;

        info!(
            "Loaded endpoints: login={}, chat={}, register={}",
            config.login, config.chat, config.register
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::Mutex;

    /// Serves a fixed body and records requested paths
    #[derive(Debug, Default)]
    struct FixedTransport {
        body: Option<String>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl Transport for FixedTransport {
        async fn fetch_text(&self, path: &str) -> Result<String> {
            self.requested.lock().unwrap().push(path.to_string());
            self.body
                .clone()
                .ok_or_else(|| Error::status(500, "unavailable"))
        }

        async fn submit_form(&self, _path: &str, _fields: &[(&str, &str)]) -> Result<String> {
            unreachable!("loader never writes")
        }
    }

    fn serving(body: &str) -> FixedTransport {
        FixedTransport {
            body: Some(body.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_config_literal() {
        let loader = ConfigLoader::new(serving(
            "ipLogin:1.2.3.4:8080;\nipChat:1.2.3.4:8081;\nipRegister:1.2.3.4:8082;",
        ));

        let config = loader.load_config().await.unwrap();

        assert_eq!(config.login, "1.2.3.4:8080");
        assert_eq!(config.chat, "1.2.3.4:8081");
        assert_eq!(config.register, "1.2.3.4:8082");
        assert_eq!(
            *loader.transport.requested.lock().unwrap(),
            vec!["js/config.txt".to_string()]
        );
    }

    #[tokio::test]
    async fn test_load_config_custom_path() {
        let loader = ConfigLoader::new(serving("ipLogin:a;ipChat:b;ipRegister:c;"))
            .with_read_path("conf/endpoints.txt");

        loader.load_config().await.unwrap();

        assert_eq!(loader.read_path(), "conf/endpoints.txt");
        assert_eq!(
            loader.transport.requested.lock().unwrap()[0],
            "conf/endpoints.txt"
        );
    }

    #[tokio::test]
    async fn test_load_config_malformed_body() {
        let loader = ConfigLoader::new(serving("ipLogin:a"));
        let err = loader.load_config().await.unwrap_err();

        assert!(matches!(err, Error::Parse { .. }));
    }

    #[tokio::test]
    async fn test_load_config_empty_body() {
        let loader = ConfigLoader::new(serving(""));
        let err = loader.load_config().await.unwrap_err();

        assert!(matches!(err, Error::MissingField { .. }));
    }

    #[tokio::test]
    async fn test_load_config_transport_failure() {
        let loader = ConfigLoader::new(FixedTransport::default());
        let err = loader.load_config().await.unwrap_err();

        assert!(matches!(err, Error::Status { status: 500, .. }));
    }
}
